use axum::{
    Json,
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::attendance::adapters::inbound::http_error::error_response;
use crate::modules::attendance::core::calendar::{CalendarGrid, Week};
use crate::shared::core::period::{InvalidPeriod, ReportingPeriod};

#[derive(Deserialize)]
pub struct CalendarParams {
    pub year: i32,
    pub month: u32,
}

#[derive(Serialize)]
pub struct CalendarResponse {
    pub period: ReportingPeriod,
    pub weeks: Vec<Week>,
    /// Absent at the edges of the supported year range.
    pub previous: Option<ReportingPeriod>,
    pub next: Option<ReportingPeriod>,
}

impl From<CalendarGrid> for CalendarResponse {
    fn from(grid: CalendarGrid) -> Self {
        Self {
            previous: grid.period.previous().ok(),
            next: grid.period.next().ok(),
            period: grid.period,
            weeks: grid.weeks.to_vec(),
        }
    }
}

fn build(params: &CalendarParams) -> Result<CalendarGrid, InvalidPeriod> {
    ReportingPeriod::new(params.year, params.month).map(CalendarGrid::build)
}

pub async fn handle(Query(params): Query<CalendarParams>) -> impl IntoResponse {
    match build(&params) {
        Ok(grid) => Json(CalendarResponse::from(grid)).into_response(),
        Err(e) => error_response(StatusCode::BAD_REQUEST, e),
    }
}
