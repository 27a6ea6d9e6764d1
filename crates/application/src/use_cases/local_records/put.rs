use std::str::FromStr;
use std::sync::Arc;

use dns_test_server_domain::{DomainError, LocalRecord, RecordType};
use tracing::info;

use crate::ports::RecordStore;

/// Whether a put created a new key or appended to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Created,
    Appended,
}

pub struct PutLocalRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl PutLocalRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn execute(
        &self,
        record_type: &str,
        name: &str,
        value: Option<&str>,
        ttl: Option<u32>,
    ) -> Result<(LocalRecord, PutOutcome), DomainError> {
        let record_type = RecordType::from_str(record_type)?;

        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DomainError::InvalidRecordValue("missing record value".to_string()))?;

        let mut record = LocalRecord::new(record_type, name, value)?;
        if let Some(ttl) = ttl {
            record = record.with_ttl(ttl);
        }

        let existed = self.store.add(record.clone());
        let outcome = if existed {
            PutOutcome::Appended
        } else {
            PutOutcome::Created
        };

        info!(
            name = %record.name,
            record_type = %record_type,
            value = %record.data,
            outcome = ?outcome,
            "Stored local record"
        );

        Ok((record, outcome))
    }
}
