// Append-only ledger port.
//
// A ledger is a set of independent streams (one per employee for punches). Entries are
// never edited in place; the only write is an append guarded by the version the caller
// last observed, so two sessions racing on the same stream are ordered by the store
// and the loser sees a VersionMismatch instead of silently interleaving.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedLedger<E> {
    pub entries: Vec<E>,
    pub version: i64,
}

#[async_trait]
pub trait Ledger<Entry: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedLedger<Entry>, LedgerError>;
    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        entry: Entry,
    ) -> Result<i64, LedgerError>;
}

pub mod in_memory;
