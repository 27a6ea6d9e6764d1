pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dns_test_server_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

/// Plain DNS transports used to reach upstream resolvers.
pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Udp,
    Tcp,
}

pub fn create_transport(protocol: Protocol, server: SocketAddr) -> Transport {
    match protocol {
        Protocol::Udp => Transport::Udp(udp::UdpTransport::new(server)),
        Protocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(server)),
    }
}

pub(crate) fn io_error(server: SocketAddr, context: &str, e: std::io::Error) -> DomainError {
    DomainError::TransportError {
        server: server.to_string(),
        reason: format!("{}: {}", context, e),
    }
}

pub(crate) fn timed_out(server: SocketAddr) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}
