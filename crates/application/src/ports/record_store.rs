use dns_test_server_domain::{LocalRecord, RecordType};

/// Concurrent mapping from `(fully-qualified name, record type)` to the
/// records stored under that key, in insertion order.
///
/// Implementations normalize every name with [`dns_test_server_domain::fqdn`]
/// before using it as a key, so lookups are case- and trailing-dot-insensitive.
/// Each call is atomic at its own key.
pub trait RecordStore: Send + Sync {
    /// Append `record` to its key. Returns whether the key already held at
    /// least one record.
    fn add(&self, record: LocalRecord) -> bool;

    /// Snapshot of the records stored under `(name, record_type)`; empty when
    /// the key is absent.
    fn find(&self, name: &str, record_type: RecordType) -> Vec<LocalRecord>;

    /// Delete every record under `(name, record_type)`. Returns whether
    /// anything was deleted.
    fn remove(&self, name: &str, record_type: RecordType) -> bool;
}
