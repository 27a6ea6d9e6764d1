use std::str::FromStr;
use std::sync::Arc;

use dns_test_server_domain::{fqdn, DomainError, LocalRecord, RecordType};

use crate::ports::RecordStore;

pub struct GetLocalRecordsUseCase {
    store: Arc<dyn RecordStore>,
}

impl GetLocalRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, record_type: &str, name: &str) -> Result<Vec<LocalRecord>, DomainError> {
        let record_type = RecordType::from_str(record_type)?;
        let records = self.store.find(name, record_type);

        if records.is_empty() {
            return Err(DomainError::NotFound(format!(
                "{} {}",
                record_type,
                fqdn(name)
            )));
        }

        Ok(records)
    }
}
