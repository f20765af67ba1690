use crate::modules::attendance::core::entries::{PunchDirection, PunchLedgerEntry};
use chrono::{TimeZone, Utc};

/// An on-site entry for emp-0001 on 2025-11-08 at the given hour.
pub fn ledger_entry(direction: PunchDirection, hour: u32) -> PunchLedgerEntry {
    PunchLedgerEntry {
        entry_id: format!("entry-{hour:02}-{direction}"),
        employee_id: "emp-0001".to_string(),
        direction,
        timestamp: Utc.with_ymd_and_hms(2025, 11, 8, hour, 0, 0).unwrap(),
        distance_meters: 12.5,
        was_remote_approved: false,
        remote_justification: None,
    }
}
