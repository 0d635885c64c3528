//! Health check route.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::http::state::AppState;

/// GET /health - Liveness endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": state.uptime_seconds(),
    }))
}
