use crate::config::AppConfig;
use crate::modules::attendance::adapters::outbound::records_in_memory::InMemoryRecords;
use crate::modules::attendance::core::entries::PunchLedgerEntry;
use crate::modules::attendance::use_cases::punch::handler::PunchHandler;
use crate::modules::attendance::use_cases::reconcile_period::handler::ReconcilePeriodHandler;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shared::infrastructure::ledger::in_memory::InMemoryLedger;
use std::sync::Arc;

pub type InMemoryPunchHandler = PunchHandler<InMemoryLedger<PunchLedgerEntry>, InMemoryDomainOutbox>;
pub type InMemoryReconcileHandler = ReconcilePeriodHandler<InMemoryRecords, InMemoryRecords>;

#[derive(Clone)]
pub struct AppState {
    pub punch_handler: Arc<InMemoryPunchHandler>,
    pub reconcile_handler: Arc<InMemoryReconcileHandler>,
}

impl AppState {
    /// Wire every handler against process-local adapters.
    pub fn in_memory(config: &AppConfig, records: Arc<InMemoryRecords>) -> Self {
        let ledger = Arc::new(InMemoryLedger::<PunchLedgerEntry>::new());
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        Self {
            punch_handler: Arc::new(PunchHandler::new(
                config.ledger_topic.clone(),
                ledger,
                outbox,
                config.geofence_policy(),
            )),
            reconcile_handler: Arc::new(ReconcilePeriodHandler::new(records.clone(), records)),
        }
    }
}
