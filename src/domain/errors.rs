//! Error taxonomy for the listings data service.

use thiserror::Error;

/// Errors raised by the store, the repositories, and the write orchestrator.
///
/// Read paths absorb `NotConfigured`, `Connection`, and `QueryFailed` at the
/// resilient repository boundary and serve fallback data instead. Write paths
/// surface `Write` to the caller as a single user-visible failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store is not configured: set DB_SERVER to a database location")]
    NotConfigured,

    #[error("failed to connect to store: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    QueryFailed(#[from] sqlx::Error),

    #[error("unexpected row data: {0}")]
    Parse(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("write failed: {0}")]
    Write(String),

    #[error("no agents available for assignment")]
    NoAgentsAvailable,

    #[error("validation failed: {0}")]
    Validation(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
