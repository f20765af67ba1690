use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use tokio::sync::Mutex;

/// Outbox kept in process memory, in enqueue order.
///
/// The duplicate check and the push happen under one lock, so two dispatches of the
/// same ledger append can never both land.
#[derive(Default)]
pub struct InMemoryDomainOutbox {
    queue: Mutex<Vec<OutboxRow>>,
    offline: bool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn pending(&self) -> Vec<OutboxRow> {
        self.queue.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.offline {
            return Err(OutboxError::Backend("Outbox offline".into()));
        }
        let mut queue = self.queue.lock().await;
        let already_queued = queue
            .iter()
            .any(|r| r.stream_id == row.stream_id && r.stream_version == row.stream_version);
        if already_queued {
            return Err(OutboxError::Duplicate {
                stream_id: row.stream_id,
                stream_version: row.stream_version,
            });
        }
        queue.push(row);
        Ok(())
    }
}
