use crate::modules::attendance::use_cases::punch::command::PunchAttempt;
use crate::shared::infrastructure::capture::{LocationProvider, PhotoCapture};
use chrono::{DateTime, Utc};

/// Acquire the photo and the location fix for one attempt.
///
/// A capability that fails leaves its field empty; the decider turns that into the
/// matching rejection. Nothing is written here, so a failed capture leaves no trace.
pub async fn capture_attempt(
    employee_id: &str,
    photos: &impl PhotoCapture,
    locations: &impl LocationProvider,
    remote_justification: Option<String>,
    captured_at: DateTime<Utc>,
) -> PunchAttempt {
    let photo = photos
        .capture()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, employee_id, "photo capture failed"))
        .ok();
    let location = locations
        .current_location()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, employee_id, "location fix failed"))
        .ok();

    PunchAttempt {
        employee_id: employee_id.to_string(),
        photo,
        location,
        remote_justification,
        captured_at,
    }
}
