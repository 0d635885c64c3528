//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::models::Config;
use crate::domain::ports::{
    AgentRepository, ClientRepository, PropertyRepository, VisitRepository,
};
use crate::infrastructure::database::{
    ConnectionManager, SqliteAgentRepository, SqliteClientRepository, SqlitePropertyRepository,
    SqliteVisitRepository,
};
use crate::infrastructure::fallback::{ResilientAgentRepository, ResilientPropertyRepository};
use crate::services::ListingService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    manager: Arc<ConnectionManager>,
    properties: Arc<dyn PropertyRepository>,
    listings: ListingService,
    start_time: Instant,
}

impl AppState {
    /// Wire the full stack over one connection manager: live sqlite
    /// repositories, resilient read decorators, and the write orchestrator.
    pub fn new(config: Config, manager: Arc<ConnectionManager>) -> Self {
        let properties: Arc<dyn PropertyRepository> = Arc::new(ResilientPropertyRepository::new(
            SqlitePropertyRepository::new(manager.clone()),
        ));
        let agents: Arc<dyn AgentRepository> = Arc::new(ResilientAgentRepository::new(
            SqliteAgentRepository::new(manager.clone()),
        ));
        let clients: Arc<dyn ClientRepository> =
            Arc::new(SqliteClientRepository::new(manager.clone()));
        let visits: Arc<dyn VisitRepository> =
            Arc::new(SqliteVisitRepository::new(manager.clone()));

        let listings = ListingService::new(properties.clone(), agents, clients, visits);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                manager,
                properties,
                listings,
                start_time: Instant::now(),
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn manager(&self) -> &Arc<ConnectionManager> {
        &self.inner.manager
    }

    pub fn properties(&self) -> &Arc<dyn PropertyRepository> {
        &self.inner.properties
    }

    pub fn listings(&self) -> &ListingService {
        &self.inner.listings
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.inner.start_time.elapsed().as_secs()
    }
}
