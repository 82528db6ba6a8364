//! Unit tests for the persisted override store

use crate::common::{weight, BrokenMedium};
use cycle_tracker::store::{
    InMemoryOverrideStore, MemoryMedium, OverrideStore, PersistedOverrideStore, DELETED_KEY,
    WEIGHTS_KEY,
};

#[test]
fn test_empty_store_reads_empty() {
    let store = InMemoryOverrideStore::default();
    assert!(store.get_weight_overrides().is_empty());
    assert!(store.get_deleted_ids().is_empty());
    assert!(!store.is_weight_customized("ro-1"));
}

#[test]
fn test_set_weight_override_upserts() {
    let mut store = InMemoryOverrideStore::default();
    store.set_weight_override("ro-1", weight(40)).unwrap();
    store.set_weight_override("ro-2", weight(5)).unwrap();
    store.set_weight_override("ro-1", weight(60)).unwrap();

    let overrides = store.get_weight_overrides();
    assert_eq!(overrides.len(), 2);
    assert_eq!(overrides["ro-1"], weight(60));
    assert_eq!(overrides["ro-2"], weight(5));
    assert!(store.is_weight_customized("ro-1"));
}

#[test]
fn test_weights_record_is_json_object() {
    let mut store = InMemoryOverrideStore::default();
    store.set_weight_override("ro-1", weight(40)).unwrap();

    let raw = store.medium().raw(WEIGHTS_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(value, serde_json::json!({ "ro-1": 40 }));
}

#[test]
fn test_clear_weight_override_is_idempotent() {
    let mut store = InMemoryOverrideStore::default();
    store.set_weight_override("ro-1", weight(40)).unwrap();
    store.set_weight_override("ro-2", weight(30)).unwrap();

    store.clear_weight_override("ro-1").unwrap();
    let once = store.get_weight_overrides();
    store.clear_weight_override("ro-1").unwrap();
    let twice = store.get_weight_overrides();

    assert_eq!(once, twice);
    assert!(!twice.contains_key("ro-1"));
    assert_eq!(twice["ro-2"], weight(30));
}

#[test]
fn test_clear_missing_override_is_noop() {
    let mut store = InMemoryOverrideStore::default();
    store.clear_weight_override("nope").unwrap();
    assert!(store.get_weight_overrides().is_empty());
}

#[test]
fn test_clear_all_weight_overrides() {
    let mut store = InMemoryOverrideStore::default();
    store.set_weight_override("ro-1", weight(40)).unwrap();
    store.clear_all_weight_overrides().unwrap();
    assert!(store.get_weight_overrides().is_empty());
}

#[test]
fn test_add_deleted_id_is_idempotent() {
    let mut store = InMemoryOverrideStore::default();
    store.add_deleted_id("ro-4").unwrap();
    store.add_deleted_id("ro-4").unwrap();

    let raw = store.medium().raw(DELETED_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(value, serde_json::json!(["ro-4"]));
    assert!(store.get_deleted_ids().contains("ro-4"));
}

#[test]
fn test_add_deleted_id_purges_weight_override() {
    let mut store = InMemoryOverrideStore::default();
    store.set_weight_override("ro-4", weight(35)).unwrap();
    store.set_weight_override("ro-1", weight(12)).unwrap();

    store.add_deleted_id("ro-4").unwrap();

    let overrides = store.get_weight_overrides();
    assert!(!overrides.contains_key("ro-4"));
    assert_eq!(overrides["ro-1"], weight(12));
}

#[test]
fn test_clear_deleted_ids() {
    let mut store = InMemoryOverrideStore::default();
    store.add_deleted_id("a").unwrap();
    store.add_deleted_id("b").unwrap();

    store.clear_deleted_id("a").unwrap();
    let deleted = store.get_deleted_ids();
    assert!(!deleted.contains("a"));
    assert!(deleted.contains("b"));

    store.clear_all_deleted_ids().unwrap();
    assert!(store.get_deleted_ids().is_empty());
}

#[test]
fn test_corrupt_payloads_read_as_empty() {
    let medium = MemoryMedium::new()
        .with_entry(WEIGHTS_KEY, "{not json")
        .with_entry(DELETED_KEY, "\"just a string\"");
    let store = PersistedOverrideStore::new(medium);

    assert!(store.get_weight_overrides().is_empty());
    assert!(store.get_deleted_ids().is_empty());
}

#[test]
fn test_invalid_override_entries_are_skipped() {
    let medium = MemoryMedium::new().with_entry(
        WEIGHTS_KEY,
        r#"{"ro-1": 40, "ro-2": 250, "ro-3": "high", "ro-4": -1, "roff-1": 20.0}"#,
    );
    let store = PersistedOverrideStore::new(medium);

    let overrides = store.get_weight_overrides();
    assert_eq!(overrides.len(), 2);
    assert_eq!(overrides["ro-1"], weight(40));
    assert_eq!(overrides["roff-1"], weight(20));
}

#[test]
fn test_write_after_corrupt_payload_replaces_it() {
    let medium = MemoryMedium::new().with_entry(WEIGHTS_KEY, "garbage");
    let mut store = PersistedOverrideStore::new(medium);

    store.set_weight_override("ro-1", weight(50)).unwrap();
    let overrides = store.get_weight_overrides();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides["ro-1"], weight(50));
}

#[test]
fn test_broken_medium_reads_empty_and_reports_write_errors() {
    let mut store = PersistedOverrideStore::new(BrokenMedium);

    assert!(store.get_weight_overrides().is_empty());
    assert!(store.get_deleted_ids().is_empty());
    assert!(store.set_weight_override("ro-1", weight(10)).is_err());
    assert!(store.add_deleted_id("ro-1").is_err());
}
