//! Database connection

use crate::config::DatabaseConfig;
use crate::error::DemoError;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

/// Open a pooled connection for the configured DSN.
///
/// sqlx turns on `foreign_keys` for every SQLite connection, so association
/// constraints hold on both supported backends.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DemoError> {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());

    // Every connection to `sqlite::memory:` opens its own private database
    if is_in_memory_sqlite(&cfg.dsn) {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(cfg.max_connections.max(1));
    }
    opts.connect_timeout(cfg.connect_timeout)
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opts)
        .await
        .map_err(|source| DemoError::Connect { source })?;

    tracing::info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

fn is_in_memory_sqlite(dsn: &str) -> bool {
    dsn.starts_with("sqlite:") && dsn.contains(":memory:")
}
