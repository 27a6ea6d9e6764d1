use std::str::FromStr;
use std::sync::Arc;

use dns_test_server_domain::{fqdn, DomainError, RecordType};
use tracing::info;

use crate::ports::RecordStore;

pub struct DeleteLocalRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl DeleteLocalRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns whether any record was removed. Removing an absent key is a
    /// no-op, not an error.
    pub fn execute(&self, record_type: &str, name: &str) -> Result<bool, DomainError> {
        let record_type = RecordType::from_str(record_type)?;
        let removed = self.store.remove(name, record_type);

        info!(
            name = %fqdn(name),
            record_type = %record_type,
            removed,
            "Deleted local records"
        );

        Ok(removed)
    }
}
