//! Repository ports (trait interfaces) for the persistence layer.

pub mod agent_repository;
pub mod client_repository;
pub mod property_repository;
pub mod visit_repository;

pub use agent_repository::AgentRepository;
pub use client_repository::ClientRepository;
pub use property_repository::PropertyRepository;
pub use visit_repository::VisitRepository;
