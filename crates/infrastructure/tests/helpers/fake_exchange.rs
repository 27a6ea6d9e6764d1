use async_trait::async_trait;
use dns_test_server_domain::DomainError;
use dns_test_server_infrastructure::dns::UpstreamExchange;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum FakeReply {
    /// One A record per question, for every address given.
    Answer(Vec<Ipv4Addr>),
    Code(ResponseCode),
    Error,
    /// Never answers; the failover timeout has to cut it off.
    Hang,
}

/// Scripted upstreams. Unscripted servers fail with a transport error.
#[derive(Default)]
pub struct FakeExchange {
    replies: HashMap<SocketAddr, FakeReply>,
    contacted: Mutex<Vec<SocketAddr>>,
    received: Mutex<Vec<Message>>,
}

impl FakeExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, server: SocketAddr, reply: FakeReply) -> Self {
        self.replies.insert(server, reply);
        self
    }

    pub fn contacted(&self) -> Vec<SocketAddr> {
        self.contacted.lock().unwrap().clone()
    }

    pub fn received(&self) -> Vec<Message> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamExchange for FakeExchange {
    async fn exchange(
        &self,
        server: SocketAddr,
        query: &Message,
        _timeout: Duration,
    ) -> Result<Message, DomainError> {
        self.contacted.lock().unwrap().push(server);
        self.received.lock().unwrap().push(query.clone());

        let mut response = Message::new();
        response
            .set_id(query.id())
            .set_message_type(MessageType::Response)
            .set_response_code(ResponseCode::NoError);
        response.add_queries(query.queries().iter().cloned());

        match self.replies.get(&server).cloned() {
            Some(FakeReply::Answer(addresses)) => {
                for question in query.queries() {
                    for ip in &addresses {
                        response.add_answer(Record::from_rdata(
                            question.name().clone(),
                            60,
                            RData::A(A(*ip)),
                        ));
                    }
                }
                Ok(response)
            }
            Some(FakeReply::Code(code)) => {
                response.set_response_code(code);
                Ok(response)
            }
            Some(FakeReply::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(response)
            }
            Some(FakeReply::Error) | None => Err(DomainError::TransportError {
                server: server.to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }
}
