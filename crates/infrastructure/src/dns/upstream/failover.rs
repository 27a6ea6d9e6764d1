use super::{UpstreamExchange, UpstreamResult};
use crate::dns::events::{QueryEvent, QueryEventEmitter, QueryEventKind};
use crate::dns::forwarding::ResponseParser;
use dns_test_server_domain::DomainError;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Tries upstreams one at a time, in configured order.
///
/// A transport error, a timeout, an undecodable reply and a SERVFAIL all
/// move on to the next server. Any other response code ends the walk.
pub struct FailoverStrategy {
    exchange: Arc<dyn UpstreamExchange>,
    servers: Arc<[SocketAddr]>,
    timeout: Duration,
}

impl FailoverStrategy {
    pub fn new(
        exchange: Arc<dyn UpstreamExchange>,
        servers: impl Into<Arc<[SocketAddr]>>,
        timeout: Duration,
    ) -> Self {
        Self {
            exchange,
            servers: servers.into(),
            timeout,
        }
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    pub async fn query(
        &self,
        query: &Message,
        emitter: &QueryEventEmitter,
    ) -> Result<UpstreamResult, DomainError> {
        let domain: Arc<str> = query
            .queries()
            .first()
            .map(|q| Arc::from(q.name().to_string()))
            .unwrap_or_else(|| Arc::from("."));

        if self.servers.is_empty() {
            emitter.emit(QueryEvent::new(
                query.id(),
                Arc::clone(&domain),
                QueryEventKind::UpstreamsExhausted { attempted: 0 },
            ));
            return Err(DomainError::TransportNoUpstreams);
        }
        debug!(strategy = "failover", servers = self.servers.len(), domain = %domain, "Trying sequentially");

        for (index, server) in self.servers.iter().copied().enumerate() {
            let start = Instant::now();
            let outcome = tokio::time::timeout(
                self.timeout,
                self.exchange.exchange(server, query, self.timeout),
            )
            .await
            .unwrap_or_else(|_| {
                Err(DomainError::TransportTimeout {
                    server: server.to_string(),
                })
            })
            .and_then(|response| {
                if ResponseParser::is_server_failure(&response) {
                    Err(DomainError::UpstreamServerFailure {
                        server: server.to_string(),
                    })
                } else {
                    Ok(response)
                }
            });

            match outcome {
                Ok(response) => {
                    let elapsed = start.elapsed();
                    debug!(server = %server, latency_ms = elapsed.as_millis() as u64, position = index, "Server responded");
                    emitter.emit(QueryEvent::new(
                        query.id(),
                        Arc::clone(&domain),
                        QueryEventKind::UpstreamAnswered {
                            server,
                            response_code: response.response_code(),
                            response_time_us: elapsed.as_micros() as u64,
                        },
                    ));
                    return Ok(UpstreamResult { response, server });
                }
                Err(e) => {
                    warn!(server = %server, error = %e, position = index, "Failing over");
                    emitter.emit(QueryEvent::new(
                        query.id(),
                        Arc::clone(&domain),
                        QueryEventKind::UpstreamFailed {
                            server,
                            reason: Arc::from(e.to_string()),
                        },
                    ));
                }
            }
        }

        emitter.emit(QueryEvent::new(
            query.id(),
            domain,
            QueryEventKind::UpstreamsExhausted {
                attempted: self.servers.len(),
            },
        ));
        Err(DomainError::TransportAllServersUnreachable)
    }
}
