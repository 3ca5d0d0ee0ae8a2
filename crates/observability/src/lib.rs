//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// The [`Logger`](itemstore_core::Logger) backed by the tracing pipeline.
pub mod logger;

pub use logger::TracingLogger;
