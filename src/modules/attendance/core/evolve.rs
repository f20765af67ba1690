use crate::modules::attendance::core::entries::{PunchDirection, PunchLedgerEntry};
use crate::modules::attendance::core::state::PunchState;

pub fn evolve(_state: PunchState, entry: &PunchLedgerEntry) -> PunchState {
    match entry.direction {
        PunchDirection::In => PunchState::PunchedIn {
            at: entry.timestamp,
        },
        PunchDirection::Out => PunchState::PunchedOut {
            at: entry.timestamp,
        },
    }
}

pub fn fold(entries: &[PunchLedgerEntry]) -> PunchState {
    entries.iter().fold(PunchState::NeverPunched, evolve)
}
