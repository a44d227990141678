//! SQLite persistence for the Trackside backend.
//!
//! - [`create_pool`] opens (creating if needed) the database file.
//! - [`init_schema`] applies the embedded, idempotent schema.
//! - [`models`] holds row types and nested response DTOs.
//! - [`repositories`] holds one zero-sized repository per entity family.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Embedded schema applied by [`init_schema`].
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Create a connection pool from a database URL or bare file path.
///
/// Foreign keys are enforced, the journal runs in WAL mode, writers wait up
/// to five seconds on a locked database, and the file is created if missing.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let url = if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else {
        format!("sqlite://{database_url}")
    };

    let options = SqliteConnectOptions::from_str(&url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal);

    SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Create every table and index that does not exist yet.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    tracing::debug!("Database schema ensured");
    Ok(())
}
