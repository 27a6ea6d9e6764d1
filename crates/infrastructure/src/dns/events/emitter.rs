use super::QueryEvent;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Per-query event sink handed to the resolution engine at construction.
///
/// A disabled emitter drops everything. An enabled one hands events to a
/// bounded channel and drops them when the consumer falls behind, so the query
/// path never waits on logging.
#[derive(Clone)]
pub struct QueryEventEmitter {
    sender: Option<mpsc::Sender<QueryEvent>>,
}

impl QueryEventEmitter {
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    /// `capacity` must be greater than zero.
    pub fn new_enabled(capacity: usize) -> (Self, mpsc::Receiver<QueryEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { sender: Some(tx) }, rx)
    }

    pub fn emit(&self, event: QueryEvent) {
        let Some(ref tx) = self.sender else {
            return;
        };

        match tx.try_send(event) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(event)) => {
                warn!(id = event.query_id, "Query event channel full, dropping event");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                debug!("Query event channel closed");
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl Default for QueryEventEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for QueryEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEventEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
