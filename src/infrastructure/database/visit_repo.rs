use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::models::{NewVisit, Visit};
use crate::domain::ports::VisitRepository;
use crate::infrastructure::database::ConnectionManager;

/// `SQLite` implementation of `VisitRepository`.
pub struct SqliteVisitRepository {
    manager: Arc<ConnectionManager>,
}

impl SqliteVisitRepository {
    pub const fn new(manager: Arc<ConnectionManager>) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl VisitRepository for SqliteVisitRepository {
    async fn insert(&self, visit: NewVisit) -> StoreResult<i64> {
        let pool = self.manager.acquire().await?;
        let date_str = visit.visit_date.format("%Y-%m-%d").to_string();

        let result = sqlx::query(
            r"
            INSERT INTO Visits (PropertyID, ClientID, AgentID, VisitDate)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(visit.property_id)
        .bind(visit.client_id)
        .bind(visit.agent_id)
        .bind(date_str)
        .execute(&pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list_for_property(&self, property_id: i64) -> StoreResult<Vec<Visit>> {
        let pool = self.manager.acquire().await?;

        let rows: Vec<(i64, i64, i64, i64, String)> = sqlx::query_as(
            r"
            SELECT VisitID, PropertyID, ClientID, AgentID, VisitDate
            FROM Visits
            WHERE PropertyID = ?
            ORDER BY VisitID
            ",
        )
        .bind(property_id)
        .fetch_all(&pool)
        .await?;

        rows.into_iter()
            .map(|(id, property_id, client_id, agent_id, date)| {
                let visit_date = date
                    .parse()
                    .map_err(|_| StoreError::Parse(format!("invalid visit date: {date}")))?;
                Ok(Visit {
                    id,
                    property_id,
                    client_id,
                    agent_id,
                    visit_date,
                })
            })
            .collect()
    }
}
