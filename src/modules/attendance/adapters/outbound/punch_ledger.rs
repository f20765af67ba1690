use crate::modules::attendance::core::entries::{
    PunchDirection, PunchLedgerEntry, ledger_stream_id,
};
use crate::modules::attendance::core::evolve::fold;
use crate::shared::infrastructure::ledger::{Ledger, LedgerError};
use async_trait::async_trait;

/// Punch-specific reads on top of any ledger holding punch entries.
#[async_trait]
pub trait PunchLedger: Ledger<PunchLedgerEntry> {
    /// Direction of the employee's most recent punch, read fresh from the store.
    async fn last_direction(&self, employee_id: &str) -> Result<Option<PunchDirection>, LedgerError> {
        let loaded = self.load(&ledger_stream_id(employee_id)).await?;
        Ok(fold(&loaded.entries).last_direction())
    }
}

impl<T: Ledger<PunchLedgerEntry> + ?Sized> PunchLedger for T {}
