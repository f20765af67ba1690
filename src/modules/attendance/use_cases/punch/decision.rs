use crate::modules::attendance::core::entries::PunchLedgerEntry;
use crate::modules::attendance::core::intents::AttendanceIntent;

/// Why a punch attempt was refused. Each cause needs a different prompt, so they stay
/// separate all the way to the caller.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum PunchRejection {
    #[error("photo has not been captured")]
    MissingCapture,

    #[error("location has not been acquired")]
    MissingLocation,

    #[error("{distance_meters}m from the office; a remote-work justification is required")]
    RemoteApprovalRequired { distance_meters: f64 },

    #[error("remote-work justification is blank")]
    EmptyJustification,
}

impl PunchRejection {
    pub fn kind(&self) -> &'static str {
        match self {
            PunchRejection::MissingCapture => "missing_capture",
            PunchRejection::MissingLocation => "missing_location",
            PunchRejection::RemoteApprovalRequired { .. } => "remote_approval_required",
            PunchRejection::EmptyJustification => "empty_justification",
        }
    }
}

#[derive(Debug)]
pub enum Decision {
    Accepted {
        entry: PunchLedgerEntry,
        intents: Vec<AttendanceIntent>,
    },
    Rejected {
        reason: PunchRejection,
    },
}
