//! Resilient repository decorators.
//!
//! Thin wrappers over the live repositories that catch any read failure, log
//! the cause, and serve the fixed seed dataset instead. This is the single
//! place where the fallback-on-error policy lives; reads never fail visibly
//! to callers above this layer. Writes pass through untouched.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::domain::errors::StoreResult;
use crate::domain::models::{Agent, NewProperty, Property};
use crate::domain::ports::{AgentRepository, PropertyRepository};
use crate::infrastructure::fallback::seed;

/// `PropertyRepository` decorator with fallback reads.
pub struct ResilientPropertyRepository<R> {
    live: R,
}

impl<R: PropertyRepository> ResilientPropertyRepository<R> {
    pub const fn new(live: R) -> Self {
        Self { live }
    }
}

#[async_trait]
impl<R: PropertyRepository> PropertyRepository for ResilientPropertyRepository<R> {
    async fn list(&self) -> StoreResult<Vec<Property>> {
        match self.live.list().await {
            Ok(properties) => Ok(properties),
            Err(err) => {
                warn!(%err, "property list failed, serving fallback data");
                Ok(seed::properties())
            }
        }
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Property>> {
        match self.live.get(id).await {
            Ok(property) => Ok(property),
            Err(err) => {
                warn!(%err, id, "property lookup failed, serving fallback data");
                Ok(seed::properties().into_iter().find(|p| p.id == id))
            }
        }
    }

    async fn list_recent(&self, limit: u32) -> StoreResult<Vec<Property>> {
        match self.live.list_recent(limit).await {
            Ok(properties) => Ok(properties),
            Err(err) => {
                warn!(%err, limit, "recent property list failed, serving fallback data");
                Ok(seed::properties()
                    .into_iter()
                    .take(limit as usize)
                    .collect())
            }
        }
    }

    async fn list_by_agent(&self, agent_id: i64) -> StoreResult<Vec<Property>> {
        match self.live.list_by_agent(agent_id).await {
            Ok(properties) => Ok(properties),
            Err(err) => {
                warn!(%err, agent_id, "agent property list failed, serving fallback data");
                Ok(seed::properties_for_agent(agent_id))
            }
        }
    }

    // Writes are not absorbed: a failed insert must surface to the caller.
    async fn insert(&self, property: NewProperty) -> StoreResult<i64> {
        self.live.insert(property).await
    }
}

/// `AgentRepository` decorator with fallback reads.
pub struct ResilientAgentRepository<R> {
    live: R,
}

impl<R: AgentRepository> ResilientAgentRepository<R> {
    pub const fn new(live: R) -> Self {
        Self { live }
    }
}

#[async_trait]
impl<R: AgentRepository> AgentRepository for ResilientAgentRepository<R> {
    async fn list(&self) -> StoreResult<Vec<Agent>> {
        match self.live.list().await {
            Ok(agents) => Ok(agents),
            Err(err) => {
                warn!(%err, "agent list failed, serving fallback data");
                Ok(seed::agents())
            }
        }
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Agent>> {
        match self.live.get(id).await {
            Ok(agent) => Ok(agent),
            Err(err) => {
                warn!(%err, id, "agent lookup failed, serving fallback data");
                Ok(seed::agents().into_iter().find(|a| a.id == id))
            }
        }
    }

    async fn pick_random(&self) -> StoreResult<Option<Agent>> {
        match self.live.pick_random().await {
            Ok(agent) => Ok(agent),
            Err(err) => {
                warn!(%err, "agent pick failed, drawing from fallback data");
                Ok(seed::agents().choose(&mut rand::thread_rng()).cloned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StoreError;
    use crate::domain::models::PropertyType;

    /// Live source stub whose reads always fail.
    struct DownPropertySource;

    #[async_trait]
    impl PropertyRepository for DownPropertySource {
        async fn list(&self) -> StoreResult<Vec<Property>> {
            Err(StoreError::NotConfigured)
        }

        async fn get(&self, _id: i64) -> StoreResult<Option<Property>> {
            Err(StoreError::NotConfigured)
        }

        async fn list_recent(&self, _limit: u32) -> StoreResult<Vec<Property>> {
            Err(StoreError::NotConfigured)
        }

        async fn list_by_agent(&self, _agent_id: i64) -> StoreResult<Vec<Property>> {
            Err(StoreError::NotConfigured)
        }

        async fn insert(&self, _property: NewProperty) -> StoreResult<i64> {
            Err(StoreError::Write("store unavailable".to_string()))
        }
    }

    struct DownAgentSource;

    #[async_trait]
    impl AgentRepository for DownAgentSource {
        async fn list(&self) -> StoreResult<Vec<Agent>> {
            Err(StoreError::NotConfigured)
        }

        async fn get(&self, _id: i64) -> StoreResult<Option<Agent>> {
            Err(StoreError::NotConfigured)
        }

        async fn pick_random(&self) -> StoreResult<Option<Agent>> {
            Err(StoreError::NotConfigured)
        }
    }

    #[tokio::test]
    async fn test_list_falls_back_to_full_seed_dataset() {
        let repo = ResilientPropertyRepository::new(DownPropertySource);

        let properties = repo.list().await.unwrap();
        assert_eq!(properties.len(), 6);
        assert_eq!(
            properties.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[tokio::test]
    async fn test_get_falls_back_to_seed_filtered_by_id() {
        let repo = ResilientPropertyRepository::new(DownPropertySource);

        let property = repo.get(3).await.unwrap().unwrap();
        assert_eq!(property.id, 3);
        assert_eq!(property.property_type, PropertyType::Villa);

        assert!(repo.get(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_matches_list_filtering_on_fallback() {
        let repo = ResilientPropertyRepository::new(DownPropertySource);

        let listed = repo.list().await.unwrap();
        for expected in listed {
            let fetched = repo.get(expected.id).await.unwrap().unwrap();
            assert_eq!(fetched, expected);
        }
    }

    #[tokio::test]
    async fn test_list_recent_falls_back_to_first_n() {
        let repo = ResilientPropertyRepository::new(DownPropertySource);

        let recent = repo.list_recent(3).await.unwrap();
        assert_eq!(recent.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_list_by_agent_falls_back_to_modulo_association() {
        let repo = ResilientPropertyRepository::new(DownPropertySource);

        let associated = repo.list_by_agent(2).await.unwrap();
        assert!(!associated.is_empty());
        for property in associated {
            assert_eq!(property.id % 8, 2 % 8);
        }
    }

    #[tokio::test]
    async fn test_insert_errors_are_not_absorbed() {
        let repo = ResilientPropertyRepository::new(DownPropertySource);

        let result = repo
            .insert(NewProperty {
                property_type: PropertyType::House,
                location: "Nowhere".to_string(),
                size_sqm: 100.0,
                price_usd: 100_000.0,
                image_url: None,
                agent_id: None,
            })
            .await;

        assert!(matches!(result, Err(StoreError::Write(_))));
    }

    #[tokio::test]
    async fn test_agent_reads_fall_back() {
        let repo = ResilientAgentRepository::new(DownAgentSource);

        let agents = repo.list().await.unwrap();
        assert_eq!(agents.len(), 8);

        let agent = repo.get(4).await.unwrap().unwrap();
        assert_eq!(agent.first_name, "Jennifer");

        let picked = repo.pick_random().await.unwrap().unwrap();
        assert!((1..=8).contains(&picked.id));
    }
}
