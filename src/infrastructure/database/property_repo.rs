use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::models::{NewProperty, Property};
use crate::domain::ports::PropertyRepository;
use crate::infrastructure::database::ConnectionManager;

/// Row tuple as selected from the Properties table.
type PropertyRow = (i64, String, String, f64, f64, Option<String>, Option<i64>);

const PROPERTY_COLUMNS: &str =
    "PropertyID, PropertyType, Location, Size_sqm, PriceUSD, ImageUrl, AgentID";

/// `SQLite` implementation of `PropertyRepository`.
///
/// Acquires the shared pool per call so a store that becomes reachable after
/// startup is picked up without a restart.
pub struct SqlitePropertyRepository {
    manager: Arc<ConnectionManager>,
}

impl SqlitePropertyRepository {
    pub const fn new(manager: Arc<ConnectionManager>) -> Self {
        Self { manager }
    }

    fn parse_row(row: PropertyRow) -> StoreResult<Property> {
        let (id, property_type, location, size_sqm, price_usd, image_url, agent_id) = row;
        Ok(Property {
            id,
            property_type: property_type
                .parse()
                .map_err(|e: anyhow::Error| StoreError::Parse(e.to_string()))?,
            location,
            size_sqm,
            price_usd,
            image_url,
            agent_id,
        })
    }
}

#[async_trait]
impl PropertyRepository for SqlitePropertyRepository {
    async fn list(&self) -> StoreResult<Vec<Property>> {
        let pool = self.manager.acquire().await?;

        let rows = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM Properties ORDER BY PropertyID"
        ))
        .fetch_all(&pool)
        .await?;

        rows.into_iter().map(Self::parse_row).collect()
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Property>> {
        let pool = self.manager.acquire().await?;

        let row = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM Properties WHERE PropertyID = ?"
        ))
        .bind(id)
        .fetch_optional(&pool)
        .await?;

        row.map(Self::parse_row).transpose()
    }

    async fn list_recent(&self, limit: u32) -> StoreResult<Vec<Property>> {
        let pool = self.manager.acquire().await?;

        let rows = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM Properties ORDER BY PropertyID DESC LIMIT ?"
        ))
        .bind(i64::from(limit))
        .fetch_all(&pool)
        .await?;

        rows.into_iter().map(Self::parse_row).collect()
    }

    async fn list_by_agent(&self, agent_id: i64) -> StoreResult<Vec<Property>> {
        let pool = self.manager.acquire().await?;

        let rows = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM Properties WHERE AgentID = ? ORDER BY PropertyID"
        ))
        .bind(agent_id)
        .fetch_all(&pool)
        .await?;

        rows.into_iter().map(Self::parse_row).collect()
    }

    async fn insert(&self, property: NewProperty) -> StoreResult<i64> {
        let pool = self.manager.acquire().await?;
        let type_str = property.property_type.to_string();

        let result = sqlx::query(
            r"
            INSERT INTO Properties (PropertyType, Location, Size_sqm, PriceUSD, ImageUrl, AgentID)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(type_str)
        .bind(&property.location)
        .bind(property.size_sqm)
        .bind(property.price_usd)
        .bind(&property.image_url)
        .bind(property.agent_id)
        .execute(&pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
