//! Axum setup and router configuration.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::models::Config;
use crate::http::routes;
use crate::http::state::AppState;
use crate::infrastructure::database::ConnectionManager;

/// Create the axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(state.config().http.request_timeout_secs),
        ))
        .layer(cors);

    Router::new()
        .route("/health", get(routes::health_check))
        .route("/api/properties", get(routes::list_properties))
        .route("/api/visits", post(routes::schedule_visit))
        .route("/api/db-status", get(routes::db_status))
        .with_state(state)
        .layer(middleware)
}

/// Run the HTTP server until shutdown.
///
/// An unreachable store is logged and served through the fallback tier; it is
/// never a startup failure.
pub async fn run_server(config: Config) -> Result<()> {
    let manager = Arc::new(ConnectionManager::new(config.database.clone()));

    match manager.ping().await {
        Ok(()) => info!("listings store reachable"),
        Err(err) => warn!(%err, "listings store unavailable, reads will serve fallback data"),
    }

    let addr: SocketAddr = format!("{}:{}", config.http.bind, config.http.port)
        .parse()
        .context("invalid bind address")?;

    let state = AppState::new(config, manager.clone());
    let app = create_router(state);

    info!("listening on http://{addr}");

    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    manager.close().await;
    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
