use dns_test_server_application::ports::RecordStore;
use dns_test_server_domain::Config;
use dns_test_server_infrastructure::dns::{
    DnsServerHandler, FailoverStrategy, NetworkExchange, QueryEventEmitter, QueryEventLogger,
    ResolutionEngine,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
    /// Finishes once every handler clone, and with it the event sender, is gone.
    pub event_logger: JoinHandle<()>,
}

impl DnsServices {
    pub fn new(config: &Config, store: Arc<dyn RecordStore>, upstreams: Vec<SocketAddr>) -> Self {
        info!(
            upstreams = upstreams.len(),
            timeout_ms = config.upstream.timeout_ms,
            "Initializing DNS services"
        );

        let (emitter, rx) = QueryEventEmitter::new_enabled(config.logging.event_channel_capacity);
        let event_logger = QueryEventLogger::start(rx);

        let failover = FailoverStrategy::new(
            Arc::new(NetworkExchange::new()),
            upstreams,
            Duration::from_millis(config.upstream.timeout_ms),
        );
        let engine = Arc::new(ResolutionEngine::new(store, failover, emitter));

        Self {
            handler: DnsServerHandler::new(engine),
            event_logger,
        }
    }
}
