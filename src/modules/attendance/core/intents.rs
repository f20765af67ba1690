// Follow-up work requested by an accepted punch. Dispatched through the outbox after
// the ledger append succeeds.

use crate::modules::attendance::core::entries::{PunchDirection, PunchLedgerEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteWorkApprovalRequested {
    pub entry_id: String,
    pub employee_id: String,
    pub direction: PunchDirection,
    pub distance_meters: f64,
    pub justification: String,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttendanceIntent {
    RequestRemoteWorkApproval {
        payload: RemoteWorkApprovalRequested,
    },
}

impl AttendanceIntent {
    /// Intents implied by an accepted entry: a remote punch asks for manager review.
    pub fn for_entry(entry: &PunchLedgerEntry) -> Vec<AttendanceIntent> {
        match (&entry.remote_justification, entry.was_remote_approved) {
            (Some(justification), true) => vec![AttendanceIntent::RequestRemoteWorkApproval {
                payload: RemoteWorkApprovalRequested {
                    entry_id: entry.entry_id.clone(),
                    employee_id: entry.employee_id.clone(),
                    direction: entry.direction,
                    distance_meters: entry.distance_meters,
                    justification: justification.clone(),
                    requested_at: entry.timestamp,
                },
            }],
            _ => Vec::new(),
        }
    }
}
