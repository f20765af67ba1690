// Outbox port for follow-up work that must happen after a ledger append
// (for example, routing a remote-work exception to a manager).
//
// Rows are keyed by (stream_id, stream_version) so a retried dispatch for the same
// ledger append is detected instead of enqueued twice.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutboxError {
    #[error("duplicate outbox row for {stream_id} at version {stream_version}")]
    Duplicate {
        stream_id: String,
        stream_version: i64,
    },

    #[error("payload could not be serialized: {0}")]
    Serialization(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboxRow {
    pub topic: String,
    pub intent_type: String,
    pub stream_id: String,
    pub stream_version: i64,
    pub occurred_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;
}

pub mod in_memory;
