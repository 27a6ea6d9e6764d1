//! Mapping between `dns_test_server_domain::RecordType` and `hickory_proto::rr::RecordType`

use dns_test_server_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert a queried type to the store's type.
    ///
    /// Returns `None` for types the store can never hold; such questions are
    /// always a local miss.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            _ => None,
        }
    }
}
