use hickory_proto::op::ResponseCode;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryEventKind {
    /// Every question was answered from the local store.
    LocalAnswer { answers: usize },

    /// An upstream returned a usable (non-SERVFAIL) response.
    UpstreamAnswered {
        server: SocketAddr,
        response_code: ResponseCode,
        response_time_us: u64,
    },

    /// An exchange with an upstream failed; failover moves on.
    UpstreamFailed { server: SocketAddr, reason: Arc<str> },

    /// No upstream produced a usable response.
    UpstreamsExhausted { attempted: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryEvent {
    pub query_id: u16,

    /// Name of the first question, as received.
    pub domain: Arc<str>,

    pub kind: QueryEventKind,
}

impl QueryEvent {
    pub fn new(query_id: u16, domain: impl Into<Arc<str>>, kind: QueryEventKind) -> Self {
        Self {
            query_id,
            domain: domain.into(),
            kind,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn is_upstream_failure(&self) -> bool {
        matches!(self.kind, QueryEventKind::UpstreamFailed { .. })
    }
}
