use super::{forward, local_answer, AliasChain};
use crate::dns::events::{QueryEvent, QueryEventEmitter, QueryEventKind};
use crate::dns::forwarding::MessageBuilder;
use crate::dns::upstream::FailoverStrategy;
use dns_test_server_application::ports::RecordStore;
use hickory_proto::op::{Message, ResponseCode};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Answers queries from the record store, forwarding to upstreams when the
/// store cannot answer every question.
pub struct ResolutionEngine {
    store: Arc<dyn RecordStore>,
    failover: FailoverStrategy,
    emitter: QueryEventEmitter,
}

impl ResolutionEngine {
    pub fn new(
        store: Arc<dyn RecordStore>,
        failover: FailoverStrategy,
        emitter: QueryEventEmitter,
    ) -> Self {
        info!(
            upstreams = failover.servers().len(),
            events = emitter.is_enabled(),
            "Resolution engine created"
        );

        Self {
            store,
            failover,
            emitter,
        }
    }

    pub async fn resolve(&self, request: &Message) -> Message {
        let domain = request
            .queries()
            .first()
            .map(|q| q.name().to_ascii())
            .unwrap_or_else(|| ".".to_string());

        let chain = AliasChain::resolve(self.store.as_ref(), request.queries());
        debug!(id = request.id(), domain = %domain, aliases = chain.len(), "Alias chain resolved");

        if let Some(response) = local_answer::try_answer(self.store.as_ref(), request, &chain) {
            self.emitter.emit(QueryEvent::new(
                request.id(),
                domain,
                QueryEventKind::LocalAnswer {
                    answers: response.answers().len(),
                },
            ));
            return response;
        }

        let forwarded = forward::forwarded_query(request, &chain);
        let upstream = match self.failover.query(&forwarded, &self.emitter).await {
            Ok(result) => result,
            Err(e) => {
                debug!(id = request.id(), domain = %domain, error = %e, "Forwarding failed");
                return MessageBuilder::response_to(request, ResponseCode::NXDomain);
            }
        };

        let mut answers = match chain.answers() {
            Ok(answers) => answers,
            Err(e) => {
                warn!(id = request.id(), error = %e, "Alias chain could not be converted");
                return MessageBuilder::response_to(request, ResponseCode::ServFail);
            }
        };
        answers.extend(upstream.response.answers().iter().cloned());

        let mut response = MessageBuilder::response_to(request, ResponseCode::NoError);
        response.add_answers(answers);
        response
    }
}
