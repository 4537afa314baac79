//! In-memory conversation transcript
//!
//! Holds the ordered list of completed exchanges for the lifetime of the
//! process. Nothing is persisted; restarting the server clears the
//! transcript.

use serde::Serialize;
use tokio::sync::Mutex;

/// One completed exchange: the user's input and the model's full reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exchange {
    pub input: String,
    pub output: String,
}

/// Ordered record of completed exchanges, shared across requests
#[derive(Debug, Default)]
pub struct Transcript {
    exchanges: Mutex<Vec<Exchange>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one completed exchange
    ///
    /// An empty output is still a completed exchange and is recorded.
    pub async fn append(&self, input: String, output: String) {
        self.exchanges.lock().await.push(Exchange { input, output });
    }

    /// Clone the current ordered list of exchanges
    pub async fn snapshot(&self) -> Vec<Exchange> {
        self.exchanges.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.exchanges.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.exchanges.lock().await.is_empty()
    }
}
