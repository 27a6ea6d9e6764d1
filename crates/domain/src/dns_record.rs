mod name;
mod record;
mod record_type;

pub use name::{fqdn, validate_name};
pub use record::{LocalRecord, RecordData, DEFAULT_TTL};
pub use record_type::RecordType;
