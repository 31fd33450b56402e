//! Encoding of the plan into the two persisted records.
//!
//! `paints` and `rooms` are stored independently as JSON arrays. A record
//! that is missing, unreadable or corrupt loads as an empty collection.

use crate::domain::{Paint, Plan, Room, SnapshotError};
use crate::infra::store::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const PAINTS_KEY: &str = "paints";
pub const ROOMS_KEY: &str = "rooms";

pub fn decode<T: DeserializeOwned>(key: &str, text: &str) -> Result<Vec<T>, SnapshotError> {
    serde_json::from_str(text).map_err(|source| SnapshotError::CorruptRecord {
        key: key.to_string(),
        source,
    })
}

pub fn encode<T: Serialize>(key: &str, items: &[T]) -> Result<String, SnapshotError> {
    serde_json::to_string(items).map_err(|source| SnapshotError::Encode {
        key: key.to_string(),
        source,
    })
}

/// Read one record, never failing.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let text = match store.load(key) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::warn!("Failed to read '{}' record, starting empty: {:#}", key, err);
            return Vec::new();
        }
    };

    match decode(key, &text) {
        Ok(items) => items,
        Err(err) => {
            log::warn!("{}; starting empty", err);
            Vec::new()
        }
    }
}

pub fn load_plan(store: &dyn KeyValueStore) -> Plan {
    let paints: Vec<Paint> = load_collection(store, PAINTS_KEY);
    let rooms: Vec<Room> = load_collection(store, ROOMS_KEY);
    log::debug!("loaded {} paints and {} rooms", paints.len(), rooms.len());
    Plan::new(paints, rooms)
}

pub fn save_paints(store: &dyn KeyValueStore, paints: &[Paint]) -> Result<(), SnapshotError> {
    let text = encode(PAINTS_KEY, paints)?;
    store.save(PAINTS_KEY, &text)?;
    Ok(())
}

pub fn save_rooms(store: &dyn KeyValueStore, rooms: &[Room]) -> Result<(), SnapshotError> {
    let text = encode(ROOMS_KEY, rooms)?;
    store.save(ROOMS_KEY, &text)?;
    Ok(())
}
