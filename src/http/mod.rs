//! HTTP layer: axum router, shared state, and error mapping.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use server::{create_router, run_server};
pub use state::AppState;
