//! Uniform response envelope.

use serde::{Deserialize, Serialize};

/// Success/data/error wrapper returned by every store operation.
///
/// Exactly one of {`data` present, `error` present, neither} holds per
/// envelope; the constructors are the only way to build one:
///
/// - [`Envelope::ok`] — success with a payload
/// - [`Envelope::ok_empty`] — success with no payload (void operations)
/// - [`Envelope::fail`] — failure with a single human-readable message
///
/// Absent fields are omitted from the serialized form entirely, never
/// emitted as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> Envelope<T> {
    /// Success envelope carrying a payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Success envelope with no payload.
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// Failure envelope carrying a single human-readable message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Consume the envelope, yielding the payload if present.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_without_error_key() {
        let envelope = Envelope::ok(7);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "success": true, "data": 7 })
        );
    }

    #[test]
    fn failure_serializes_without_data_key() {
        let envelope: Envelope<i32> = Envelope::fail("nope");
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "success": false, "error": "nope" })
        );
    }

    #[test]
    fn void_success_serializes_as_success_alone() {
        let envelope: Envelope<i32> = Envelope::ok_empty();
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "success": true })
        );
    }

    #[test]
    fn accessors_expose_exactly_one_side() {
        let ok = Envelope::ok("payload");
        assert!(ok.success());
        assert_eq!(ok.data(), Some(&"payload"));
        assert_eq!(ok.error(), None);

        let fail: Envelope<&str> = Envelope::fail("message");
        assert!(!fail.success());
        assert_eq!(fail.data(), None);
        assert_eq!(fail.error(), Some("message"));
    }
}
