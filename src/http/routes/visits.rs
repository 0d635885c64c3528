//! Visit scheduling route.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::error::{ApiError, ApiResult};
use crate::http::state::AppState;

/// All fields optional so absence maps to our 400, not a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleVisitRequest {
    pub property_id: Option<i64>,
    pub client_id: Option<i64>,
    pub date: Option<String>,
}

/// POST /api/visits - Schedule a visit with a randomly assigned agent.
pub async fn schedule_visit(
    State(state): State<AppState>,
    Json(request): Json<ScheduleVisitRequest>,
) -> ApiResult<Json<Value>> {
    let (Some(property_id), Some(client_id), Some(date)) =
        (request.property_id, request.client_id, request.date)
    else {
        return Err(ApiError::BadRequest("Missing required fields".to_string()));
    };

    let visit_date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("Invalid visit date: {date}")))?;

    state
        .listings()
        .schedule_visit(property_id, client_id, visit_date)
        .await?;

    Ok(Json(json!({ "success": true })))
}
