use crate::modules::attendance::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::attendance::adapters::outbound::punch_ledger::PunchLedger;
use crate::modules::attendance::core::entries::{
    PunchDirection, PunchLedgerEntry, ledger_stream_id,
};
use crate::modules::attendance::core::evolve::fold;
use crate::modules::attendance::core::geofence::GeofencePolicy;
use crate::modules::attendance::use_cases::punch::command::PunchAttempt;
use crate::modules::attendance::use_cases::punch::decide::decide_punch;
use crate::modules::attendance::use_cases::punch::decision::{Decision, PunchRejection};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use crate::shared::infrastructure::ledger::{Ledger, LedgerError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Rejected(#[from] PunchRejection),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl ApplicationError {
    /// Another session appended first; restart the attempt from a fresh read.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ApplicationError::Ledger(LedgerError::VersionMismatch { .. })
        )
    }
}

pub struct PunchHandler<TLedger, TOutbox>
where
    TLedger: Ledger<PunchLedgerEntry> + 'static,
    TOutbox: DomainOutbox + 'static,
{
    topic: String,
    ledger: Arc<TLedger>,
    outbox: Arc<TOutbox>,
    policy: GeofencePolicy,
}

impl<TLedger, TOutbox> PunchHandler<TLedger, TOutbox>
where
    TLedger: Ledger<PunchLedgerEntry> + 'static,
    TOutbox: DomainOutbox + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        ledger: Arc<TLedger>,
        outbox: Arc<TOutbox>,
        policy: GeofencePolicy,
    ) -> Self {
        Self {
            topic: topic.into(),
            ledger,
            outbox,
            policy,
        }
    }

    pub async fn next_direction(&self, employee_id: &str) -> Result<PunchDirection, ApplicationError> {
        let last = self.ledger.last_direction(employee_id).await?;
        Ok(last.map_or(PunchDirection::In, PunchDirection::opposite))
    }

    /// Validate the attempt against the ledger as it is right now and append the
    /// resulting entry. The append only lands if nobody else appended in between.
    ///
    /// The append is the commit point. An outbox failure afterwards is logged and the
    /// saved entry is still returned, so a client never retries a punch that landed.
    pub async fn handle(&self, attempt: PunchAttempt) -> Result<PunchLedgerEntry, ApplicationError> {
        let stream_id = ledger_stream_id(&attempt.employee_id);
        let loaded = self.ledger.load(&stream_id).await.inspect_err(|e| {
            tracing::error!(error = %e, stream_id = %stream_id, "could not read punch ledger")
        })?;
        let state = fold(&loaded.entries);

        match decide_punch(&state, attempt, &self.policy) {
            Decision::Accepted { entry, intents } => {
                let version = self
                    .ledger
                    .append(&stream_id, loaded.version, entry.clone())
                    .await
                    .inspect_err(|e| match e {
                        LedgerError::VersionMismatch { .. } => {
                            tracing::warn!(error = %e, stream_id = %stream_id, "punch lost a race with another session")
                        }
                        LedgerError::Backend(_) => {
                            tracing::error!(error = %e, stream_id = %stream_id, "could not append punch")
                        }
                    })?;
                if let Err(e) =
                    dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents).await
                {
                    tracing::error!(
                        error = %e,
                        stream_id = %stream_id,
                        entry_id = %entry.entry_id,
                        version,
                        "punch saved but its remote-work review was not queued"
                    );
                }
                tracing::info!(
                    employee_id = %entry.employee_id,
                    direction = %entry.direction,
                    distance_meters = entry.distance_meters,
                    remote = entry.was_remote_approved,
                    version,
                    "punch accepted"
                );
                Ok(entry)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(stream_id = %stream_id, reason = reason.kind(), "punch rejected");
                Err(reason.into())
            }
        }
    }
}
