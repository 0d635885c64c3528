use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::models::DatabaseConfig;

/// Lazily-initialized, process-wide connection manager.
///
/// The pool is created on the first `acquire` and shared by every subsequent
/// caller until `close` resets the manager to uninitialized. First
/// initialization is guarded by an async mutex, so concurrent callers never
/// open duplicate pools. Acquire failures are ordinary errors: read paths
/// catch them and degrade to fallback data.
pub struct ConnectionManager {
    config: DatabaseConfig,
    pool: Mutex<Option<SqlitePool>>,
}

impl ConnectionManager {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: Mutex::new(None),
        }
    }

    /// Get the shared pool, creating it on first use.
    ///
    /// Runs the embedded migrations when a new pool is opened. Fails with
    /// `NotConfigured` when no store location is set and `Connection` when
    /// the location is invalid or unreachable.
    pub async fn acquire(&self) -> StoreResult<SqlitePool> {
        // Single-flight: the lock is held across initialization so racing
        // callers wait for the first one instead of opening a second pool.
        let mut guard = self.pool.lock().await;

        if let Some(pool) = guard.as_ref() {
            if !pool.is_closed() {
                return Ok(pool.clone());
            }
        }

        let url = self
            .config
            .connection_url()
            .ok_or(StoreError::NotConfigured)?;

        let options = SqliteConnectOptions::from_str(&url)
            .map_err(|e| StoreError::Connection(format!("invalid store location {url:?}: {e}")))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(self.config.busy_timeout_secs))
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(self.config.min_connections)
            .max_connections(self.config.max_connections)
            .idle_timeout(Duration::from_secs(self.config.idle_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.config.acquire_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Connection(format!("migration failed: {e}")))?;

        info!(store = %url, "connected to listings store");

        *guard = Some(pool.clone());
        Ok(pool)
    }

    /// Round-trip check: acquire the pool and run a trivial query.
    pub async fn ping(&self) -> StoreResult<()> {
        let pool = self.acquire().await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(())
    }

    /// Close the shared pool and reset the manager to uninitialized.
    ///
    /// The next `acquire` opens a fresh pool.
    pub async fn close(&self) {
        let mut guard = self.pool.lock().await;
        if let Some(pool) = guard.take() {
            pool.close().await;
            info!("listings store connection closed");
        }
    }

    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}
