use dashmap::DashMap;
use dns_test_server_application::ports::RecordStore;
use dns_test_server_domain::{fqdn, LocalRecord, RecordType};
use std::sync::Arc;
use tracing::debug;

type StoreKey = (Arc<str>, RecordType);

/// Sharded in-memory record store.
///
/// Every shard sits behind its own reader/writer lock, so lookups never wait
/// on other lookups, writes to one key are serialized, and writes to keys in
/// different shards proceed independently.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: DashMap<StoreKey, Vec<LocalRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct `(name, type)` keys currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn key(name: &str, record_type: RecordType) -> StoreKey {
        (Arc::from(fqdn(name)), record_type)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn add(&self, record: LocalRecord) -> bool {
        let key = Self::key(&record.name, record.record_type());
        let mut entry = self.records.entry(key).or_default();
        let existed = !entry.is_empty();
        entry.push(record);

        debug!(records = entry.len(), existed, "Record appended");
        existed
    }

    fn find(&self, name: &str, record_type: RecordType) -> Vec<LocalRecord> {
        self.records
            .get(&Self::key(name, record_type))
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    fn remove(&self, name: &str, record_type: RecordType) -> bool {
        self.records.remove(&Self::key(name, record_type)).is_some()
    }
}
