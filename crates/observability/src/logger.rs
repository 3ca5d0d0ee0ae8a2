//! Bridges the capability-level [`Logger`] port onto the tracing pipeline.

use itemstore_core::{LogLevel, Logger};
use serde_json::Value as JsonValue;

/// A [`Logger`] that forwards every entry to the process-wide tracing
/// subscriber, carrying the structured metadata as a `metadata` field.
///
/// Pair with [`crate::init`] to get JSON log lines on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, metadata: &JsonValue) {
        match level {
            LogLevel::Debug => tracing::debug!(metadata = %metadata, "{message}"),
            LogLevel::Info => tracing::info!(metadata = %metadata, "{message}"),
            LogLevel::Warn => tracing::warn!(metadata = %metadata, "{message}"),
            LogLevel::Error => tracing::error!(metadata = %metadata, "{message}"),
        }
    }
}
