use crate::shared::infrastructure::ledger::{Ledger, LedgerError, LoadedLedger};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

/// Ledger kept in process memory. Append returns the new stream version.
pub struct InMemoryLedger<Entry: Clone + Send + Sync + 'static> {
    streams: RwLock<HashMap<String, Vec<Entry>>>,
    offline: bool,
    delay_append_ms: AtomicU64,
}

impl<Entry: Clone + Send + Sync + 'static> Default for InMemoryLedger<Entry> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Entry: Clone + Send + Sync + 'static> InMemoryLedger<Entry> {
    pub fn new() -> Self {
        Self {
            streams: RwLock::new(HashMap::new()),
            offline: false,
            delay_append_ms: AtomicU64::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Hold every append for `ms` before it takes the write lock. Lets tests line up
    /// two sessions that both read the same version.
    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), LedgerError> {
        if self.offline {
            return Err(LedgerError::Backend("Ledger offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Entry> Ledger<Entry> for InMemoryLedger<Entry>
where
    Entry: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedLedger<Entry>, LedgerError> {
        self.ensure_online()?;
        let guard = self.streams.read().await;
        let entries = guard.get(stream_id).cloned().unwrap_or_default();
        let version = entries.len() as i64;
        Ok(LoadedLedger { entries, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        entry: Entry,
    ) -> Result<i64, LedgerError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.streams.write().await;
        let stream = guard.entry(stream_id.to_string()).or_default();
        let actual = stream.len() as i64;
        if actual != expected_version {
            return Err(LedgerError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        stream.push(entry);
        Ok(actual + 1)
    }
}
