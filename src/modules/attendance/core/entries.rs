use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunchDirection {
    In,
    Out,
}

impl PunchDirection {
    pub fn opposite(self) -> Self {
        match self {
            PunchDirection::In => PunchDirection::Out,
            PunchDirection::Out => PunchDirection::In,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PunchDirection::In => "in",
            PunchDirection::Out => "out",
        }
    }
}

impl std::fmt::Display for PunchDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accepted punch as written to the ledger. Never edited after the append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchLedgerEntry {
    pub entry_id: String,
    pub employee_id: String,
    pub direction: PunchDirection,
    pub timestamp: DateTime<Utc>,
    pub distance_meters: f64,
    pub was_remote_approved: bool,
    pub remote_justification: Option<String>,
}

pub fn ledger_stream_id(employee_id: &str) -> String {
    format!("Punches-{employee_id}")
}
