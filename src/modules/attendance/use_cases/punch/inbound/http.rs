use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::attendance::core::entries::PunchDirection;
use crate::modules::attendance::use_cases::punch::capture::capture_attempt;
use crate::modules::attendance::use_cases::punch::decision::PunchRejection;
use crate::modules::attendance::use_cases::punch::handler::ApplicationError;
use crate::shared::core::geo::GeoCoordinate;
use crate::shared::infrastructure::capture::fixed::{FixedLocation, FixedPhoto};
use crate::shared::infrastructure::capture::{CaptureError, PhotoPayload};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PunchBody {
    pub employee_id: String,
    pub photo_base64: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy_meters: Option<f64>,
    pub justification: Option<String>,
}

#[derive(Serialize)]
pub struct PunchRejectedResponse {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
}

impl From<&PunchRejection> for PunchRejectedResponse {
    fn from(reason: &PunchRejection) -> Self {
        let distance_meters = match reason {
            PunchRejection::RemoteApprovalRequired { distance_meters } => Some(*distance_meters),
            _ => None,
        };
        Self {
            error: reason.kind(),
            message: reason.to_string(),
            distance_meters,
        }
    }
}

#[derive(Deserialize)]
pub struct NextDirectionParams {
    pub employee_id: String,
}

#[derive(Serialize)]
pub struct NextDirectionResponse {
    pub next_direction: PunchDirection,
}

fn photo_from_body(photo_base64: Option<String>) -> FixedPhoto {
    match photo_base64 {
        None => FixedPhoto::from_option(None),
        Some(encoded) => FixedPhoto(
            STANDARD
                .decode(encoded.trim())
                .map(PhotoPayload::new)
                .map_err(|e| CaptureError::Unavailable(format!("photo is not valid base64: {e}"))),
        ),
    }
}

/// A reading off the globe is treated like no fix at all.
fn location_from_body(body: &PunchBody) -> FixedLocation {
    FixedLocation::from_option(match (body.latitude, body.longitude) {
        (Some(latitude), Some(longitude)) => {
            GeoCoordinate::reading(latitude, longitude, body.accuracy_meters.unwrap_or(0.0))
        }
        _ => None,
    })
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PunchBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let locations = location_from_body(&body);
    let photos = photo_from_body(body.photo_base64);
    let attempt = capture_attempt(
        &body.employee_id,
        &photos,
        &locations,
        body.justification,
        Utc::now(),
    )
    .await;

    match state.punch_handler.handle(attempt).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(ApplicationError::Rejected(reason)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(PunchRejectedResponse::from(&reason)),
        )
            .into_response(),
        Err(e) if e.is_conflict() => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn next_direction(
    State(state): State<AppState>,
    Query(params): Query<NextDirectionParams>,
) -> impl IntoResponse {
    match state.punch_handler.next_direction(&params.employee_id).await {
        Ok(next_direction) => Json(NextDirectionResponse { next_direction }).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
