//! Store connectivity probe.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::http::state::AppState;

/// GET /api/db-status - Round-trip check against the configured store.
///
/// Reports connected/error without leaking internal error text; the cause is
/// logged server-side.
pub async fn db_status(State(state): State<AppState>) -> Response {
    let database = &state.config().database;

    match state.manager().ping().await {
        Ok(()) => Json(json!({
            "status": "connected",
            "server": database.server,
            "name": database.name,
        }))
        .into_response(),
        Err(err) => {
            warn!(%err, "store connectivity probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": "Failed to connect to the database",
                    "server": database.server,
                    "name": database.name,
                })),
            )
                .into_response()
        }
    }
}
