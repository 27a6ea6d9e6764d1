pub mod events;
pub mod forwarding;
pub mod query_logger;
pub mod resolver;
pub mod server;
pub mod transport;
pub mod upstream;

pub use events::{QueryEvent, QueryEventEmitter, QueryEventKind};
pub use query_logger::QueryEventLogger;
pub use resolver::ResolutionEngine;
pub use server::DnsServerHandler;
pub use upstream::{FailoverStrategy, NetworkExchange, UpstreamExchange, UpstreamResult};
