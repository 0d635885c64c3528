//! Infrastructure layer: configuration, the live store, and the fallback tier.

pub mod config;
pub mod database;
pub mod fallback;
