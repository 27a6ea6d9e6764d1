use crate::dns::resolver::ResolutionEngine;
use hickory_proto::op::{Message, MessageType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error};

/// Bridges hickory-server's request loop to the resolution engine.
#[derive(Clone)]
pub struct DnsServerHandler {
    engine: Arc<ResolutionEngine>,
}

impl DnsServerHandler {
    pub fn new(engine: Arc<ResolutionEngine>) -> Self {
        Self { engine }
    }

    /// The request as the engine sees it: header, every question, EDNS and
    /// additional records.
    fn to_message(request: &Request) -> Message {
        let mut message = Message::new();
        message.set_header(*request.header());
        message.add_queries(request.queries().iter().map(|q| q.original().clone()));
        message.add_additionals(request.additionals().iter().cloned());
        if let Some(edns) = request.edns() {
            message.set_edns(edns.clone());
        }
        message
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        if request.message_type() == MessageType::Response {
            debug!(id = request.id(), client = %request.src(), "Dropping unsolicited response");
            return ResponseInfo::from(*request.header());
        }

        let query = Self::to_message(request);
        let response = self.engine.resolve(&query).await;

        debug!(
            id = response.id(),
            client = %request.src(),
            response_code = %response.response_code(),
            answers = response.answers().len(),
            "Sending response"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let message = builder.build(*response.header(), response.answers().iter(), &[], &[], &[]);

        match response_handle.send_response(message).await {
            Ok(info) => info,
            Err(e) => {
                error!(id = response.id(), error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}
