//! itemstore-service — the in-memory item store service.

pub mod store;

pub use store::{HealthStatus, ItemStore};
