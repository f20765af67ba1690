use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::attendance::adapters::inbound::http_error::error_response;
use crate::modules::attendance::core::records::{MergedDayRecord, ReportingPeriodStats};
use crate::modules::attendance::use_cases::reconcile_period::handler::ReconcileError;
use crate::shared::core::period::ReportingPeriod;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AttendanceParams {
    pub employee_id: String,
    pub year: i32,
    pub month: u32,
}

#[derive(Serialize)]
pub struct StatsBody {
    #[serde(flatten)]
    pub counts: ReportingPeriodStats,
    pub attendance_percentage: f64,
}

#[derive(Serialize)]
pub struct AttendanceResponse {
    pub period: ReportingPeriod,
    pub records: Vec<MergedDayRecord>,
    pub stats: StatsBody,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<AttendanceParams>,
) -> impl IntoResponse {
    let period = match ReportingPeriod::new(params.year, params.month) {
        Ok(p) => p,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state
        .reconcile_handler
        .handle(&params.employee_id, period)
        .await
    {
        Ok(reconciliation) => Json(AttendanceResponse {
            period: reconciliation.period,
            stats: StatsBody {
                counts: reconciliation.stats,
                attendance_percentage: reconciliation.stats.attendance_percentage(),
            },
            records: reconciliation.records,
        })
        .into_response(),
        Err(e @ ReconcileError::InvalidRecord(_)) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, e)
        }
        Err(ReconcileError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
