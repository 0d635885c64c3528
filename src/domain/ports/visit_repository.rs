//! Visit repository port.

use async_trait::async_trait;

use crate::domain::errors::StoreResult;
use crate::domain::models::{NewVisit, Visit};

/// Repository interface for Visit persistence.
///
/// Visits are append-only; no uniqueness constraint applies (a client may
/// book the same property repeatedly).
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Insert a new visit row, returning the generated id.
    async fn insert(&self, visit: NewVisit) -> StoreResult<i64>;

    /// List visits booked for a property, oldest first.
    async fn list_for_property(&self, property_id: i64) -> StoreResult<Vec<Visit>>;
}
