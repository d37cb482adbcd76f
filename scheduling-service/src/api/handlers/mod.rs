pub mod engine_handlers;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub use engine_handlers::{
    bridge_days, detect_conflicts, generate_schedule, possible_leave_days, validate_leave,
    working_days,
};

/// Health check handler
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
