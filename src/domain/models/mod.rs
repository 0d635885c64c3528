//! Domain entity models.

pub mod agent;
pub mod client;
pub mod config;
pub mod property;
pub mod visit;

pub use agent::Agent;
pub use client::{Client, NewClient};
pub use config::{Config, DatabaseConfig, HttpConfig, LoggingConfig};
pub use property::{NewProperty, Property, PropertyType};
pub use visit::{NewVisit, Visit};
