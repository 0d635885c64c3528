//! Shared test fixtures: file-backed temporary stores and row helpers.

use std::sync::Arc;

use hearth::{ConnectionManager, DatabaseConfig};
use tempfile::TempDir;

/// A migrated, file-backed store living in a temp directory.
///
/// File-backed rather than in-memory so every pooled connection sees the same
/// database.
pub struct TestStore {
    pub manager: Arc<ConnectionManager>,
    _dir: TempDir,
}

pub async fn file_backed_store() -> TestStore {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("listings.db");

    let config = DatabaseConfig {
        server: Some(path.display().to_string()),
        ..DatabaseConfig::default()
    };

    let manager = Arc::new(ConnectionManager::new(config));
    manager.acquire().await.expect("store should initialize");

    TestStore { manager, _dir: dir }
}

/// A manager with no configured store; every live read fails and resilient
/// wrappers serve fallback data.
#[allow(dead_code)]
pub fn unconfigured_store() -> Arc<ConnectionManager> {
    Arc::new(ConnectionManager::new(DatabaseConfig::default()))
}

#[allow(dead_code)]
pub async fn insert_agent(manager: &ConnectionManager, first_name: &str, last_name: &str) -> i64 {
    let pool = manager.acquire().await.expect("store unavailable");
    let email = format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );

    let result = sqlx::query(
        "INSERT INTO Agents (FirstName, LastName, Phone, Email) VALUES (?, ?, ?, ?)",
    )
    .bind(first_name)
    .bind(last_name)
    .bind("(555) 010-0000")
    .bind(email)
    .execute(&pool)
    .await
    .expect("failed to insert agent");

    result.last_insert_rowid()
}

#[allow(dead_code)]
pub async fn count_rows(manager: &ConnectionManager, table: &str) -> i64 {
    let pool = manager.acquire().await.expect("store unavailable");
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&pool)
        .await
        .expect("failed to count rows");
    count
}
