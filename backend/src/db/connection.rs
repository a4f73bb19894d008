use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub type DbPool = PgPool;

#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl PoolConfig {
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            max_connections: config.db_max_connections.max(1),
            acquire_timeout: Duration::from_secs(config.db_acquire_timeout_seconds),
        }
    }
}

pub async fn create_pool(database_url: &str, pool_config: PoolConfig) -> anyhow::Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(pool_config.max_connections)
        .acquire_timeout(pool_config.acquire_timeout)
        .connect(database_url)
        .await?;
    tracing::info!(
        max_connections = pool_config.max_connections,
        "Database pool created"
    );
    Ok(pool)
}
