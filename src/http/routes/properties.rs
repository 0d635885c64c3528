//! Property routes.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::http::error::{ApiError, ApiResult};
use crate::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PropertiesQuery {
    pub id: Option<i64>,
}

/// GET /api/properties - List all properties, or fetch one with `?id=<n>`.
///
/// Reads go through the resilient tier, so a down store yields the fallback
/// dataset with a 200, never an error page.
pub async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<PropertiesQuery>,
) -> ApiResult<Response> {
    if let Some(id) = query.id {
        let property = state
            .properties()
            .get(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;
        return Ok(Json(property).into_response());
    }

    let properties = state.properties().list().await?;
    Ok(Json(properties).into_response())
}
