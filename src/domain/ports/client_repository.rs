//! Client repository port.

use async_trait::async_trait;

use crate::domain::errors::StoreResult;
use crate::domain::models::{Client, NewClient};

/// Repository interface for Client persistence.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Look up a client by email (the natural key).
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Client>>;

    /// Find the client with the given email, inserting a row if absent.
    ///
    /// Must be race-free: concurrent calls with the same email resolve to one
    /// row. Implementations rely on the store's UNIQUE constraint plus
    /// conflict-tolerant insert, not application-level locking.
    async fn find_or_create(&self, client: NewClient) -> StoreResult<i64>;
}
