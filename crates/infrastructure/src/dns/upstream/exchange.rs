use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::{self, Protocol};
use async_trait::async_trait;
use dns_test_server_domain::DomainError;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// One request/response exchange with a single upstream resolver.
#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    async fn exchange(
        &self,
        server: SocketAddr,
        query: &Message,
        timeout: Duration,
    ) -> Result<Message, DomainError>;
}

/// Plain DNS over the network: UDP first, TCP when the UDP answer is
/// truncated.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetworkExchange;

impl NetworkExchange {
    pub fn new() -> Self {
        Self
    }

    async fn send_over(
        protocol: Protocol,
        server: SocketAddr,
        query_bytes: &[u8],
        expected_id: u16,
        timeout: Duration,
    ) -> Result<Message, DomainError> {
        let transport = transport::create_transport(protocol, server);
        let response = transport.send(query_bytes, timeout).await?;
        let message = ResponseParser::parse(&response.bytes)?;

        if message.id() != expected_id {
            return Err(DomainError::TransportError {
                server: server.to_string(),
                reason: format!(
                    "response id {} does not match query id {}",
                    message.id(),
                    expected_id
                ),
            });
        }

        Ok(message)
    }
}

#[async_trait]
impl UpstreamExchange for NetworkExchange {
    async fn exchange(
        &self,
        server: SocketAddr,
        query: &Message,
        timeout: Duration,
    ) -> Result<Message, DomainError> {
        let start = Instant::now();
        let query_bytes = MessageBuilder::serialize(query)?;

        let response =
            Self::send_over(Protocol::Udp, server, &query_bytes, query.id(), timeout).await?;
        if !response.truncated() {
            return Ok(response);
        }

        debug!(server = %server, "Response truncated (TC bit), retrying via TCP");

        let remaining = timeout
            .checked_sub(start.elapsed())
            .unwrap_or(Duration::from_millis(500));
        Self::send_over(Protocol::Tcp, server, &query_bytes, query.id(), remaining).await
    }
}
