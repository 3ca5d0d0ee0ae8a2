//! itemstore-items — the item domain: requests, validation, and the item
//! entity itself.

pub mod item;
pub mod request;

pub use item::Item;
pub use request::{CreateItemBody, NewItem, NAME_MAX_CHARS};
