//! Logging capability.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Severity of a log event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Structured logging capability injected into services.
///
/// Callers supply a level, a message, and free-form metadata; transport,
/// formatting, and destination are the implementation's concern.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, metadata: &JsonValue);

    fn debug(&self, message: &str, metadata: &JsonValue) {
        self.log(LogLevel::Debug, message, metadata);
    }

    fn info(&self, message: &str, metadata: &JsonValue) {
        self.log(LogLevel::Info, message, metadata);
    }

    fn warn(&self, message: &str, metadata: &JsonValue) {
        self.log(LogLevel::Warn, message, metadata);
    }

    fn error(&self, message: &str, metadata: &JsonValue) {
        self.log(LogLevel::Error, message, metadata);
    }
}

/// Logger that discards everything. The standard test substitute.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str, _metadata: &JsonValue) {}
}

/// A recorded log event.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub metadata: JsonValue,
}

/// Logger that buffers entries in memory behind a shared handle.
///
/// Clones share one buffer, so a test can hand one handle to the service and
/// keep another for assertions afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str, metadata: &JsonValue) {
        self.entries.lock().unwrap().push(LogEntry {
            level,
            message: message.to_string(),
            metadata: metadata.clone(),
        });
    }
}
