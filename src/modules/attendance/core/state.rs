// Punch state of one employee, folded from their ledger stream.
//
// Nothing here is cached between attempts: every attempt folds a fresh read of the
// ledger, so two sessions for the same employee always agree with the store.

use crate::modules::attendance::core::entries::PunchDirection;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum PunchState {
    NeverPunched,
    PunchedIn { at: DateTime<Utc> },
    PunchedOut { at: DateTime<Utc> },
}

impl PunchState {
    pub fn last_direction(&self) -> Option<PunchDirection> {
        match self {
            PunchState::NeverPunched => None,
            PunchState::PunchedIn { .. } => Some(PunchDirection::In),
            PunchState::PunchedOut { .. } => Some(PunchDirection::Out),
        }
    }

    /// `in` for a fresh employee, otherwise the opposite of the last punch.
    pub fn next_direction(&self) -> PunchDirection {
        self.last_direction()
            .map(PunchDirection::opposite)
            .unwrap_or(PunchDirection::In)
    }
}
