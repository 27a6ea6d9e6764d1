#![allow(dead_code)]
mod builders;
mod dns_server_mock;
mod fake_exchange;

pub use builders::{engine_with, query, query_with_id, upstreams};
pub use dns_server_mock::{MockDnsServer, MockMode};
pub use fake_exchange::{FakeExchange, FakeReply};
