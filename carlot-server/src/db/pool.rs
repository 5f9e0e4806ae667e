//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits. Handlers check a
//! connection out per statement and it returns to the pool on drop.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use super::DbConfig;

fn pool_options(config: &DbConfig) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}

/// Create a MySQL connection pool, connecting immediately.
///
/// # Errors
///
/// Returns an error if the options are invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<MySqlPool, sqlx::Error> {
    let options = config.connect_options()?;
    pool_options(config).connect_with(options).await
}

/// Create a MySQL connection pool that connects on first use.
///
/// The server starts even when the database is down; requests fail with
/// a store error until it becomes reachable.
pub fn create_lazy_pool(config: &DbConfig) -> Result<MySqlPool, sqlx::Error> {
    let options = config.connect_options()?;
    Ok(pool_options(config).connect_lazy_with(options))
}
