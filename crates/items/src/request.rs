//! Incoming item requests and their validation.
//!
//! A [`CreateItemBody`] is whatever the caller handed us; a [`NewItem`] is a
//! body that survived validation. Construction is the only door between the
//! two, so downstream code never re-checks the name.

use itemstore_core::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Maximum accepted item name length, counted in characters after trimming.
pub const NAME_MAX_CHARS: usize = 100;

/// Raw payload of a create-item request, before any validation.
///
/// `name` is optional because callers can omit the field entirely; that case
/// is folded into the empty-name rejection rather than reported separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemBody {
    pub name: Option<String>,
}

impl CreateItemBody {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// A create-item request that passed validation.
///
/// The name is trimmed, non-empty, and at most [`NAME_MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
}

impl NewItem {
    /// Validates a raw request body, failing on the first broken rule.
    ///
    /// Checks run in order: the body must be present, the trimmed name must
    /// be non-empty, and the trimmed name must fit in [`NAME_MAX_CHARS`]
    /// characters. Length is counted in characters, not bytes, so multibyte
    /// names are not penalized.
    pub fn parse(body: Option<CreateItemBody>) -> ValidationResult<Self> {
        let body = body.ok_or(ValidationError::MissingBody)?;
        let name = body.name.as_deref().unwrap_or("").trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(ValidationError::NameTooLong);
        }
        Ok(Self {
            name: name.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}
