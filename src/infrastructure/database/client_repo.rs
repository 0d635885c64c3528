use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::StoreResult;
use crate::domain::models::{Client, NewClient};
use crate::domain::ports::ClientRepository;
use crate::infrastructure::database::ConnectionManager;

/// `SQLite` implementation of `ClientRepository`.
pub struct SqliteClientRepository {
    manager: Arc<ConnectionManager>,
}

impl SqliteClientRepository {
    pub const fn new(manager: Arc<ConnectionManager>) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl ClientRepository for SqliteClientRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Client>> {
        let pool = self.manager.acquire().await?;

        let row = sqlx::query_as::<_, (i64, String, String, String, String)>(
            "SELECT ClientID, FirstName, LastName, Email, Phone FROM Clients WHERE Email = ?",
        )
        .bind(email)
        .fetch_optional(&pool)
        .await?;

        Ok(row.map(|(id, first_name, last_name, email, phone)| Client {
            id,
            first_name,
            last_name,
            email,
            phone,
        }))
    }

    async fn find_or_create(&self, client: NewClient) -> StoreResult<i64> {
        let pool = self.manager.acquire().await?;

        // The UNIQUE constraint on Email makes this race-free: under
        // concurrent calls exactly one insert wins and every caller's
        // follow-up select resolves to that row.
        sqlx::query(
            r"
            INSERT INTO Clients (FirstName, LastName, Email, Phone)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (Email) DO NOTHING
            ",
        )
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.email)
        .bind(&client.phone)
        .execute(&pool)
        .await?;

        let (id,): (i64,) = sqlx::query_as("SELECT ClientID FROM Clients WHERE Email = ?")
            .bind(&client.email)
            .fetch_one(&pool)
            .await?;

        Ok(id)
    }
}
