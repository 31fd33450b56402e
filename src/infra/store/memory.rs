use super::KeyValueStore;
use anyhow::Result;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Process-local store, used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw record text.
    pub fn with_record(self, key: &str, value: &str) -> Self {
        self.records.lock().insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.records.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
