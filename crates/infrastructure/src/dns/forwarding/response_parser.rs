use dns_test_server_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS response: {}", e))
        })
    }

    /// Only SERVFAIL makes failover move on. NXDOMAIN, REFUSED and friends are
    /// legitimate answers and are passed through.
    pub fn is_server_failure(response: &Message) -> bool {
        response.response_code() == ResponseCode::ServFail
    }
}
