use super::*;
use crate::util::storage::MemoryStorage;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    items: Vec<String>,
}

fn sample() -> Sample {
    Sample { items: vec!["b".to_owned(), "a".to_owned(), "c".to_owned()] }
}

#[test]
fn load_missing_key_is_none() {
    let storage = MemoryStorage::new();
    let loaded: Option<Sample> = load_snapshot(&storage, "k").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn save_then_load_preserves_order() {
    let storage = MemoryStorage::new();
    save_snapshot(&storage, "k", &sample()).unwrap();
    let loaded: Option<Sample> = load_snapshot(&storage, "k").unwrap();
    assert_eq!(loaded, Some(sample()));
}

#[test]
fn save_writes_versioned_envelope() {
    let storage = MemoryStorage::new();
    save_snapshot(&storage, "k", &sample()).unwrap();
    let raw = storage.get("k").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 0);
    assert_eq!(value["state"]["items"][0], "b");
}

#[test]
fn load_accepts_envelope_without_version() {
    let storage = MemoryStorage::new();
    storage.set("k", r#"{"state":{"items":["x"]}}"#).unwrap();
    let loaded: Option<Sample> = load_snapshot(&storage, "k").unwrap();
    assert_eq!(loaded, Some(Sample { items: vec!["x".to_owned()] }));
}

#[test]
fn load_reports_newer_version() {
    let storage = MemoryStorage::new();
    storage.set("k", r#"{"state":{"items":["x"]},"version":7}"#).unwrap();
    assert_eq!(load_snapshot::<Sample>(&storage, "k"), Err(StorageError::NewerVersion(7)));
}

#[test]
fn load_checks_version_before_decoding_state() {
    let storage = MemoryStorage::new();
    storage.set("k", r#"{"state":{"entries":{"x":1}},"version":2}"#).unwrap();
    assert_eq!(load_snapshot::<Sample>(&storage, "k"), Err(StorageError::NewerVersion(2)));
}

#[test]
fn load_wrong_state_shape_is_malformed() {
    let storage = MemoryStorage::new();
    storage.set("k", r#"{"state":{"items":"x"},"version":0}"#).unwrap();
    assert!(matches!(load_snapshot::<Sample>(&storage, "k"), Err(StorageError::Malformed(_))));
}

#[test]
fn load_malformed_json_is_error() {
    let storage = MemoryStorage::new();
    storage.set("k", "{not json").unwrap();
    let loaded = load_snapshot::<Sample>(&storage, "k");
    assert!(matches!(loaded, Err(StorageError::Malformed(_))));
}

#[test]
fn unavailable_storage_propagates() {
    let storage = MemoryStorage::unavailable();
    assert_eq!(save_snapshot(&storage, "k", &sample()), Err(StorageError::Unavailable));
    assert_eq!(load_snapshot::<Sample>(&storage, "k"), Err(StorageError::Unavailable));
}

// =============================================================
// SnapshotSlot
// =============================================================

#[test]
fn slot_does_not_write_before_read() {
    let storage = MemoryStorage::new();
    let slot = SnapshotSlot::new(storage.shared(), "k");
    slot.write(&sample());
    assert_eq!(storage.get("k"), Ok(None));
}

#[test]
fn slot_writes_after_read() {
    let storage = MemoryStorage::new();
    let mut slot = SnapshotSlot::new(storage.shared(), "k");
    assert!(slot.read::<Sample>().is_none());
    assert_eq!(slot.state(), SlotState::Read);
    slot.write(&sample());
    assert_eq!(slot.read::<Sample>(), Some(sample()));
}

#[test]
fn slot_stays_unread_while_storage_unavailable() {
    let storage = MemoryStorage::unavailable();
    let mut slot = SnapshotSlot::new(storage.shared(), "k");
    assert!(slot.read::<Sample>().is_none());
    assert!(!slot.is_settled());

    storage.set_available(true);
    storage.set("k", r#"{"state":{"items":["late"]},"version":0}"#).unwrap();
    assert_eq!(slot.read::<Sample>(), Some(Sample { items: vec!["late".to_owned()] }));
    assert!(slot.is_settled());
}

#[test]
fn slot_leaves_newer_snapshot_untouched() {
    let storage = MemoryStorage::new();
    let newer = r#"{"state":{"items":["x"]},"version":3}"#;
    storage.set("k", newer).unwrap();
    let mut slot = SnapshotSlot::new(storage.shared(), "k");

    assert!(slot.read::<Sample>().is_none());
    assert_eq!(slot.state(), SlotState::Foreign);
    slot.write(&sample());
    assert_eq!(storage.get("k"), Ok(Some(newer.to_owned())));
}

#[test]
fn slot_overwrites_malformed_snapshot() {
    let storage = MemoryStorage::new();
    storage.set("k", "{oops").unwrap();
    let mut slot = SnapshotSlot::new(storage.shared(), "k");
    assert!(slot.read::<Sample>().is_none());
    slot.write(&sample());
    assert_eq!(load_snapshot::<Sample>(&storage, "k"), Ok(Some(sample())));
}
