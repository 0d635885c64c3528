//! Hearth - Real-estate listings data service
//!
//! A data-access core for browsing and submitting property listings, with a
//! small JSON API on top. Reads degrade to a fixed fallback dataset when the
//! relational store is unreachable; writes surface failures to the caller.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): entity models, error taxonomy, and the
//!   repository ports
//! - **Service Layer** (`services`): the write orchestrator composing
//!   repository calls into the submission and visit flows
//! - **Infrastructure Layer** (`infrastructure`): configuration, the sqlite
//!   store, and the fallback tier
//! - **HTTP Layer** (`http`): axum routes and error mapping
//! - **CLI Layer** (`cli`): `serve` and `status` commands

pub mod cli;
pub mod domain;
pub mod http;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{StoreError, StoreResult};
pub use domain::models::{
    Agent, Client, Config, DatabaseConfig, HttpConfig, LoggingConfig, NewClient, NewProperty,
    NewVisit, Property, PropertyType, Visit,
};
pub use domain::ports::{
    AgentRepository, ClientRepository, PropertyRepository, VisitRepository,
};
pub use http::{create_router, AppState};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::database::ConnectionManager;
pub use services::{ListingService, PropertySubmission, SubmissionReceipt};
