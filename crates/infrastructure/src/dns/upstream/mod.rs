pub mod exchange;
pub mod failover;

pub use exchange::{NetworkExchange, UpstreamExchange};
pub use failover::FailoverStrategy;

use hickory_proto::op::Message;
use std::net::SocketAddr;

/// A usable response from one upstream.
#[derive(Debug, Clone)]
pub struct UpstreamResult {
    pub response: Message,
    pub server: SocketAddr,
}
