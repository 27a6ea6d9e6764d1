use crate::dns::events::{QueryEvent, QueryEventKind};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Drains query events into `tracing`.
pub struct QueryEventLogger;

impl QueryEventLogger {
    pub fn start(mut rx: mpsc::Receiver<QueryEvent>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            debug!("QueryEventLogger: Starting consumer");

            let mut total_events = 0u64;
            while let Some(event) = rx.recv().await {
                total_events += 1;
                Self::log(&event);
            }

            debug!(total_events, "QueryEventLogger: Channel closed, stopping");
        })
    }

    fn log(event: &QueryEvent) {
        let id = event.query_id;
        let domain = event.domain();

        match &event.kind {
            QueryEventKind::LocalAnswer { answers } => {
                info!(id, domain, answers, "Answered from local records");
            }
            QueryEventKind::UpstreamAnswered {
                server,
                response_code,
                response_time_us,
            } => {
                info!(
                    id,
                    domain,
                    server = %server,
                    response_code = %response_code,
                    response_time_us,
                    "Answered by upstream"
                );
            }
            QueryEventKind::UpstreamFailed { server, reason } => {
                info!(id, domain, server = %server, reason = %reason, "Upstream exchange failed");
            }
            QueryEventKind::UpstreamsExhausted { attempted } => {
                warn!(id, domain, attempted, "No upstream answered, replying NXDOMAIN");
            }
        }
    }
}
