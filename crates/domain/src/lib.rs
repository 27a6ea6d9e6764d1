//! DNS test server domain layer
pub mod config;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig, UpstreamConfig};
pub use dns_record::{fqdn, LocalRecord, RecordData, RecordType, DEFAULT_TTL};
pub use errors::DomainError;
