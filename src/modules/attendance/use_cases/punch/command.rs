// A completed capture, ready for validation. Created once per attempt and consumed by
// the decider; fields are optional because either capability may have come back empty.

use crate::shared::core::geo::GeoCoordinate;
use crate::shared::infrastructure::capture::PhotoPayload;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct PunchAttempt {
    pub employee_id: String,
    pub photo: Option<PhotoPayload>,
    pub location: Option<GeoCoordinate>,
    pub remote_justification: Option<String>,
    pub captured_at: DateTime<Utc>,
}
