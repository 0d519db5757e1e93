//! Database connection pool management
//!
//! Connection pooling for MySQL using SQLx, configured from the shared
//! `DatabaseConfig`.

use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;
use tracing::info;

use mc_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Returns
    /// * `Ok(DatabasePool)` - Connected pool
    /// * `Err(InfrastructureError)` - Bad URL or unreachable server
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?;

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await?;

        Ok(Self { pool })
    }

    /// Access the underlying SQLx pool
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    /// Run a connectivity check against the database
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
