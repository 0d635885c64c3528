//! Property repository port.

use async_trait::async_trait;

use crate::domain::errors::StoreResult;
use crate::domain::models::{NewProperty, Property};

/// Repository interface for Property persistence.
///
/// Read operations on the serving path go through a resilient decorator that
/// substitutes fallback data on any store failure; implementations here only
/// report errors, they never absorb them.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// List all properties.
    async fn list(&self) -> StoreResult<Vec<Property>>;

    /// Get a property by id, or `None` when the id is absent.
    async fn get(&self, id: i64) -> StoreResult<Option<Property>>;

    /// List the most recently created properties, newest first.
    async fn list_recent(&self, limit: u32) -> StoreResult<Vec<Property>>;

    /// List properties assigned to an agent.
    async fn list_by_agent(&self, agent_id: i64) -> StoreResult<Vec<Property>>;

    /// Insert a new property row, returning the generated id.
    async fn insert(&self, property: NewProperty) -> StoreResult<i64>;
}
