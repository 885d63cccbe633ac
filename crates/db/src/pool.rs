//! Postgres connection pool.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::{DbConfig, DbError};

/// Type alias for the shared Postgres pool used across the whole application.
pub type DbPool = PgPool;

/// Create a new connection pool from the given config.
///
/// `max_connections` controls the pool ceiling.  Performs one `SELECT now()`
/// round-trip before returning so a bad config fails here, at startup,
/// rather than on the first request.  The connection checked out for the
/// round-trip goes back to the pool when the query future completes.
pub async fn create_pool(config: &DbConfig, max_connections: u32) -> Result<DbPool, DbError> {
    info!(
        host = %config.host,
        database = %config.database,
        max_connections,
        "Connecting to database"
    );
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(config.connect_options())
        .await?;

    let server_time = ping(&pool).await?;
    info!(%server_time, "Connection pool created successfully");

    Ok(pool)
}

/// One diagnostic round-trip: ask the server for its current time.
pub async fn ping(pool: &DbPool) -> Result<DateTime<Utc>, DbError> {
    let now: DateTime<Utc> = sqlx::query_scalar("SELECT now()").fetch_one(pool).await?;
    Ok(now)
}
