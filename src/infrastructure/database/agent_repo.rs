use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::StoreResult;
use crate::domain::models::Agent;
use crate::domain::ports::AgentRepository;
use crate::infrastructure::database::ConnectionManager;

/// Row tuple as selected from the Agents table.
type AgentRow = (
    i64,
    String,
    String,
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

const AGENT_COLUMNS: &str =
    "AgentID, FirstName, LastName, Phone, Email, ImageUrl, Specialization, Location, Bio";

/// `SQLite` implementation of `AgentRepository`.
pub struct SqliteAgentRepository {
    manager: Arc<ConnectionManager>,
}

impl SqliteAgentRepository {
    pub const fn new(manager: Arc<ConnectionManager>) -> Self {
        Self { manager }
    }

    fn from_row(row: AgentRow) -> Agent {
        let (id, first_name, last_name, phone, email, image_url, specialization, location, bio) =
            row;
        Agent {
            id,
            first_name,
            last_name,
            phone,
            email,
            image_url,
            specialization,
            location,
            bio,
        }
    }
}

#[async_trait]
impl AgentRepository for SqliteAgentRepository {
    async fn list(&self) -> StoreResult<Vec<Agent>> {
        let pool = self.manager.acquire().await?;

        let rows = sqlx::query_as::<_, AgentRow>(&format!(
            "SELECT {AGENT_COLUMNS} FROM Agents ORDER BY AgentID"
        ))
        .fetch_all(&pool)
        .await?;

        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Agent>> {
        let pool = self.manager.acquire().await?;

        let row = sqlx::query_as::<_, AgentRow>(&format!(
            "SELECT {AGENT_COLUMNS} FROM Agents WHERE AgentID = ?"
        ))
        .bind(id)
        .fetch_optional(&pool)
        .await?;

        Ok(row.map(Self::from_row))
    }

    async fn pick_random(&self) -> StoreResult<Option<Agent>> {
        let pool = self.manager.acquire().await?;

        // Selection happens store-side so concurrent schedulers draw
        // independently.
        let row = sqlx::query_as::<_, AgentRow>(&format!(
            "SELECT {AGENT_COLUMNS} FROM Agents ORDER BY RANDOM() LIMIT 1"
        ))
        .fetch_optional(&pool)
        .await?;

        Ok(row.map(Self::from_row))
    }
}
