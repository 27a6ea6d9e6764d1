use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid record value: {0}")]
    InvalidRecordValue(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Upstream {server} answered with SERVFAIL")]
    UpstreamServerFailure { server: String },

    #[error("No upstream servers configured")]
    TransportNoUpstreams,

    #[error("All upstream servers failed")]
    TransportAllServersUnreachable,
}

impl DomainError {
    /// Errors caused by malformed administrative input rather than by the
    /// server itself.
    pub fn is_client_input(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDomainName(_)
                | DomainError::InvalidIpAddress(_)
                | DomainError::UnsupportedRecordType(_)
                | DomainError::InvalidRecordValue(_)
        )
    }
}
