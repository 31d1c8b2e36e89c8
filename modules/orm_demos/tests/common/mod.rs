//! Shared helpers: every test gets its own in-memory SQLite database

use orm_demos::{connect, DatabaseConfig, DemoConfig, DemoContext, SchemaOptions};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;

pub async fn memory_db() -> Arc<DatabaseConnection> {
    let cfg = DatabaseConfig {
        dsn: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    Arc::new(connect(&cfg).await.unwrap())
}

/// Demo context that never waits before deleting
pub async fn memory_context() -> DemoContext {
    let cfg = DatabaseConfig {
        dsn: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    let db = connect(&cfg).await.unwrap();
    DemoContext::new(
        db,
        DemoConfig {
            hold_before_delete: Duration::ZERO,
        },
        SchemaOptions::default(),
    )
}
