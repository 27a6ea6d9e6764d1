use dns_test_server_application::ports::RecordStore;
use dns_test_server_domain::{fqdn, LocalRecord, RecordType};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockRecordStore {
    records: Mutex<HashMap<(String, RecordType), Vec<LocalRecord>>>,
    calls: Mutex<Vec<String>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl RecordStore for MockRecordStore {
    fn add(&self, record: LocalRecord) -> bool {
        self.record_call(format!("add {} {}", record.record_type(), record.name));
        let key = (fqdn(&record.name), record.record_type());
        let mut records = self.records.lock().unwrap();
        let entry = records.entry(key).or_default();
        let existed = !entry.is_empty();
        entry.push(record);
        existed
    }

    fn find(&self, name: &str, record_type: RecordType) -> Vec<LocalRecord> {
        self.record_call(format!("find {} {}", record_type, fqdn(name)));
        self.records
            .lock()
            .unwrap()
            .get(&(fqdn(name), record_type))
            .cloned()
            .unwrap_or_default()
    }

    fn remove(&self, name: &str, record_type: RecordType) -> bool {
        self.record_call(format!("remove {} {}", record_type, fqdn(name)));
        self.records
            .lock()
            .unwrap()
            .remove(&(fqdn(name), record_type))
            .is_some()
    }
}
