//! Domain layer: entity models, error taxonomy, and repository ports.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{StoreError, StoreResult};
