use super::{fqdn, validate_name, RecordType};
use crate::DomainError;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// TTL handed out for local records. Zero keeps test clients from caching
/// synthetic answers.
pub const DEFAULT_TTL: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Address(IpAddr),
    Alias(Arc<str>),
}

/// A resource record held by the local store. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRecord {
    pub name: Arc<str>,

    pub data: RecordData,

    pub ttl: u32,
}

impl LocalRecord {
    /// Parse a record from its administrative text form: a record type, an
    /// owning name and a type-specific value.
    pub fn new(record_type: RecordType, name: &str, value: &str) -> Result<Self, DomainError> {
        validate_name(name)?;
        let value = value.trim();

        match record_type {
            RecordType::A => match value.parse::<IpAddr>() {
                Ok(ip @ IpAddr::V4(_)) => Ok(Self::address(name, ip)),
                _ => Err(DomainError::InvalidIpAddress(format!(
                    "{} is not an IPv4 address",
                    value
                ))),
            },
            RecordType::AAAA => match value.parse::<IpAddr>() {
                Ok(ip @ IpAddr::V6(_)) => Ok(Self::address(name, ip)),
                _ => Err(DomainError::InvalidIpAddress(format!(
                    "{} is not an IPv6 address",
                    value
                ))),
            },
            RecordType::CNAME => {
                if value.is_empty() {
                    return Err(DomainError::InvalidRecordValue(
                        "alias target must not be empty".to_string(),
                    ));
                }
                validate_name(value)?;
                Ok(Self::alias(name, value))
            }
        }
    }

    pub fn address(name: &str, address: IpAddr) -> Self {
        Self {
            name: fqdn(name).into(),
            data: RecordData::Address(address),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn alias(name: &str, target: &str) -> Self {
        Self {
            name: fqdn(name).into(),
            data: RecordData::Alias(fqdn(target).into()),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::Address(IpAddr::V4(_)) => RecordType::A,
            RecordData::Address(IpAddr::V6(_)) => RecordType::AAAA,
            RecordData::Alias(_) => RecordType::CNAME,
        }
    }

    /// Target of an alias record, `None` for address records.
    pub fn alias_target(&self) -> Option<&str> {
        match &self.data {
            RecordData::Alias(target) => Some(target),
            RecordData::Address(_) => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Address(ip) => write!(f, "{}", ip),
            RecordData::Alias(target) => write!(f, "{}", target),
        }
    }
}

// master file presentation: name, ttl, class, type, rdata
impl fmt::Display for LocalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tIN\t{}\t{}",
            self.name,
            self.ttl,
            self.record_type(),
            self.data
        )
    }
}
