//! Pluggable progress persistence.
//!
//! The ledger core is storage-agnostic: it talks to a [`ProgressStore`]
//! only at construction (load) and after an accepted level completion
//! (save). The crate ships an in-memory store; callers wanting durable or
//! remote-synced storage implement the same trait and inject it.

use rustc_hash::FxHashMap;

use crate::levels::ProgressRecord;

/// Storage strategy for progress records, keyed by an opaque per-user id.
pub trait ProgressStore {
    /// Load the record for `key`, if one was ever saved.
    fn load(&self, key: &str) -> Option<ProgressRecord>;

    /// Save the record for `key`, replacing any previous one.
    fn save(&mut self, key: &str, record: &ProgressRecord);
}

/// In-memory store. Useful for tests and single-process callers that
/// handle durability themselves.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: FxHashMap<String, ProgressRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a record, e.g. one imported from bytes.
    #[must_use]
    pub fn with_record(key: impl Into<String>, record: ProgressRecord) -> Self {
        let mut store = Self::new();
        store.records.insert(key.into(), record);
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, key: &str) -> Option<ProgressRecord> {
        self.records.get(key).cloned()
    }

    fn save(&mut self, key: &str, record: &ProgressRecord) {
        self.records.insert(key.to_string(), record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.load("alice").is_none());

        let mut record = ProgressRecord::new();
        record.highest_level = 7;
        store.save("alice", &record);

        assert_eq!(store.load("alice"), Some(record));
        assert!(store.load("bob").is_none());
    }

    #[test]
    fn test_save_replaces() {
        let mut store = MemoryStore::new();
        let mut record = ProgressRecord::new();

        store.save("alice", &record);
        record.total_score = 500;
        store.save("alice", &record);

        assert_eq!(store.load("alice").unwrap().total_score, 500);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_record() {
        let mut record = ProgressRecord::new();
        record.highest_level = 30;

        let store = MemoryStore::with_record("alice", record.clone());
        assert_eq!(store.load("alice"), Some(record));
    }
}
