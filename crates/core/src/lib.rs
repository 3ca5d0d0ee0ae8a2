//! `itemstore-core` — contract foundation building blocks.
//!
//! This crate contains the pieces every layer shares: the strongly-typed item
//! identifier, the validation error taxonomy, the response envelope, and the
//! capability ports (clock, id generation, logging) with their pure
//! implementations. No storage or transport concerns live here.

pub mod clock;
pub mod envelope;
pub mod error;
pub mod id;
pub mod logger;

pub use clock::{Clock, FixedClock, SystemClock};
pub use envelope::Envelope;
pub use error::{ValidationError, ValidationResult};
pub use id::{IdGenerator, ItemId, UuidGenerator};
pub use logger::{LogEntry, LogLevel, Logger, MemoryLogger, NoopLogger};
