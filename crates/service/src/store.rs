//! The item store: a keyed in-memory collection with validated boundaries.

use std::collections::HashMap;

use itemstore_core::{Clock, Envelope, IdGenerator, ItemId, Logger, SystemClock, UuidGenerator};
use itemstore_items::{CreateItemBody, Item, NewItem};
use itemstore_observability::TracingLogger;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Payload of a successful [`ItemStore::health_check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    status: String,
}

impl HealthStatus {
    /// The one status this service ever reports.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

/// In-memory keyed item collection.
///
/// Operations are synchronous and run to completion before the next begins;
/// mutation takes `&mut self`, so a multi-threaded host supplies its own
/// lock around the store. Every operation answers with an [`Envelope`];
/// validation failures come back as `success: false` with a stable contract
/// message, never as a panic or an `Err`.
///
/// The clock, id generator, and logger are injected capabilities so tests
/// can pin time, fix ids, and observe log output. [`ItemStore::new`] wires
/// the production set.
pub struct ItemStore<C = SystemClock, G = UuidGenerator, L = TracingLogger> {
    items: HashMap<ItemId, Item>,
    clock: C,
    ids: G,
    logger: L,
}

impl ItemStore {
    /// Empty store with production capabilities: wall clock, UUIDv7 ids,
    /// tracing-backed logs.
    pub fn new() -> Self {
        Self::with_capabilities(SystemClock, UuidGenerator, TracingLogger)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, G, L> ItemStore<C, G, L>
where
    C: Clock,
    G: IdGenerator,
    L: Logger,
{
    /// Empty store with explicit capabilities.
    pub fn with_capabilities(clock: C, ids: G, logger: L) -> Self {
        Self {
            items: HashMap::new(),
            clock,
            ids,
            logger,
        }
    }

    /// Liveness probe. Touches nothing and never fails.
    pub fn health_check(&self) -> Envelope<HealthStatus> {
        Envelope::ok(HealthStatus::ok())
    }

    /// All current items, ordered by id.
    ///
    /// Ids are time-ordered (UUIDv7), so under the production generator this
    /// is creation order. The order is stable across calls either way.
    pub fn list_items(&self) -> Envelope<Vec<Item>> {
        let mut items: Vec<Item> = self.items.values().cloned().collect();
        items.sort_by_key(|item| item.id());
        Envelope::ok(items)
    }

    /// Validate and insert a new item.
    ///
    /// Fail-fast: the first broken rule decides the failure envelope, the
    /// collection stays untouched, and nothing is logged. On success the
    /// item is stored under a fresh id, one `item created` event is logged
    /// with that id, and the item comes back in the envelope.
    pub fn create_item(&mut self, body: Option<CreateItemBody>) -> Envelope<Item> {
        let request = match NewItem::parse(body) {
            Ok(request) => request,
            Err(err) => return Envelope::fail(err.to_string()),
        };

        let id = self.ids.next_id();
        let item = Item::new(id, request, self.clock.now());
        self.items.insert(id, item.clone());
        self.logger.info("item created", &json!({ "id": id }));
        Envelope::ok(item)
    }

    /// Clear the collection. A lifecycle utility for isolating scenarios,
    /// not part of the caller-facing contract.
    pub fn reset(&mut self) {
        let removed = self.items.len();
        self.items.clear();
        self.logger
            .debug("collection cleared", &json!({ "removed": removed }));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
