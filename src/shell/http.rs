use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::attendance::use_cases::calendar_grid::inbound::http as calendar_http;
use crate::modules::attendance::use_cases::punch::inbound::http as punch_http;
use crate::modules::attendance::use_cases::reconcile_period::inbound::http as attendance_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/punch", post(punch_http::handle))
        .route("/punch/next", get(punch_http::next_direction))
        .route("/attendance", get(attendance_http::handle))
        .route("/calendar", get(calendar_http::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
