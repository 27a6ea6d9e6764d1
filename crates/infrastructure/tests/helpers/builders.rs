use super::FakeExchange;
use dns_test_server_application::ports::RecordStore;
use dns_test_server_infrastructure::dns::{FailoverStrategy, QueryEventEmitter, ResolutionEngine};
use hickory_proto::op::{Message, Query};
use hickory_proto::rr::{Name, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// `n` distinct loopback upstream addresses, in order.
pub fn upstreams(n: u16) -> Vec<SocketAddr> {
    (1..=n)
        .map(|i| SocketAddr::from(([127, 0, 0, 1], 5300 + i)))
        .collect()
}

pub fn query(questions: &[(&str, RecordType)]) -> Message {
    query_with_id(0x1234, questions)
}

pub fn query_with_id(id: u16, questions: &[(&str, RecordType)]) -> Message {
    let mut message = Message::new();
    message.set_id(id).set_recursion_desired(true);
    for (name, record_type) in questions {
        message.add_query(Query::query(Name::from_ascii(name).unwrap(), *record_type));
    }
    message
}

pub fn engine_with(
    store: Arc<dyn RecordStore>,
    exchange: Arc<FakeExchange>,
    servers: Vec<SocketAddr>,
) -> ResolutionEngine {
    let failover = FailoverStrategy::new(exchange, servers, Duration::from_millis(500));
    ResolutionEngine::new(store, failover, QueryEventEmitter::new_disabled())
}
