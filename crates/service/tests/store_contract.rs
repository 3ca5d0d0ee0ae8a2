//! Black-box checks against the public store contract, including the exact
//! serialized envelope shapes a host would put on the wire.

use chrono::Utc;
use itemstore_core::ItemId;
use itemstore_items::CreateItemBody;
use itemstore_service::ItemStore;
use serde_json::json;

fn body(name: &str) -> Option<CreateItemBody> {
    Some(CreateItemBody::new(name))
}

#[test]
fn item_lifecycle_create_list_reset() {
    itemstore_observability::init();
    let mut store = ItemStore::new();

    // Create
    let created = store.create_item(body("Widget"));
    assert!(created.success());
    let created = created.into_data().unwrap();
    assert_eq!(created.name(), "Widget");

    // List
    let listed = store.list_items().into_data().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), created.id());

    // Reset
    store.reset();
    assert_eq!(store.list_items().into_data().unwrap().len(), 0);
}

#[test]
fn envelope_wire_shape_for_success_and_failure() {
    let mut store = ItemStore::new();

    let health = serde_json::to_value(store.health_check()).unwrap();
    assert_eq!(health, json!({ "success": true, "data": { "status": "ok" } }));

    let failure = serde_json::to_value(store.create_item(body(""))).unwrap();
    assert_eq!(
        failure,
        json!({ "success": false, "error": "Item name is required." })
    );

    let success = serde_json::to_value(store.create_item(body("Widget"))).unwrap();
    assert_eq!(success["success"], true);
    assert!(success.get("error").is_none());

    let data = success["data"].as_object().unwrap();
    let mut keys: Vec<&str> = data.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["createdAt", "id", "name"]);
    assert_eq!(data["name"], "Widget");
    data["id"]
        .as_str()
        .unwrap()
        .parse::<ItemId>()
        .expect("id serializes as a UUID string");
}

#[test]
fn created_at_falls_within_the_call_window() {
    let mut store = ItemStore::new();

    let before = Utc::now();
    let created = store.create_item(body("Widget")).into_data().unwrap();
    let after = Utc::now();

    assert!(before <= created.created_at());
    assert!(created.created_at() <= after);
}

#[test]
fn validation_messages_are_contract_verbatim() {
    let mut store = ItemStore::new();

    let trimmed = store.create_item(body("  Trimmed  "));
    assert_eq!(trimmed.data().map(|item| item.name()), Some("Trimmed"));

    let empty = store.create_item(body(""));
    assert_eq!(empty.error(), Some("Item name is required."));

    let overlong = store.create_item(body(&"x".repeat(101)));
    assert_eq!(
        overlong.error(),
        Some("Item name must not exceed 100 characters.")
    );

    let absent = store.create_item(None);
    assert_eq!(absent.error(), Some("Request body is required."));

    // Only the trimmed create made it into the collection.
    assert_eq!(store.list_items().into_data().unwrap().len(), 1);
}
