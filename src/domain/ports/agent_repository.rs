//! Agent repository port.

use async_trait::async_trait;

use crate::domain::errors::StoreResult;
use crate::domain::models::Agent;

/// Repository interface for Agent reads.
///
/// Agents are read-only in this service; there is no creation flow.
#[async_trait]
pub trait AgentRepository: Send + Sync {
    /// List all agents.
    async fn list(&self) -> StoreResult<Vec<Agent>>;

    /// Get an agent by id, or `None` when the id is absent.
    async fn get(&self, id: i64) -> StoreResult<Option<Agent>>;

    /// Pick one agent uniformly at random, or `None` when the set is empty.
    ///
    /// Placeholder assignment rule for visit scheduling; do not replace with
    /// a load-balanced or territory-based policy without product input.
    async fn pick_random(&self) -> StoreResult<Option<Agent>>;
}
