//! The stored item entity.

use chrono::{DateTime, Utc};
use itemstore_core::ItemId;
use serde::{Deserialize, Serialize};

use crate::request::NewItem;

/// An item held by the collection.
///
/// Only constructible from a validated [`NewItem`], so every `Item` in
/// existence carries a trimmed, length-checked name. Serializes with
/// camelCase keys (`id`, `name`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(id: ItemId, request: NewItem, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: request.into_name(),
            created_at,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
