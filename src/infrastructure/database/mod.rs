//! `SQLite` implementations of the repository ports, plus the connection
//! manager that owns the shared pool.

pub mod agent_repo;
pub mod client_repo;
pub mod connection;
pub mod property_repo;
pub mod visit_repo;

pub use agent_repo::SqliteAgentRepository;
pub use client_repo::SqliteClientRepository;
pub use connection::ConnectionManager;
pub use property_repo::SqlitePropertyRepository;
pub use visit_repo::SqliteVisitRepository;
