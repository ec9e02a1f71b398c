use crate::core::{AppError, Result};
use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://sales.db".to_string()),
            pool_size: env::var("DATABASE_POOL_SIZE")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_POOL_SIZE".to_string())
                })?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_MAX_CONNECTIONS".to_string())
                })?,
            acquire_timeout_secs: env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_ACQUIRE_TIMEOUT_SECS".to_string())
                })?,
        })
    }

    /// Create a read-only SQLite connection pool.
    ///
    /// The summary flow never writes, so the server opens the store read-only
    /// and fails fast if the database file is missing.
    pub async fn create_pool(&self) -> Result<SqlitePool> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .read_only(true)
            .busy_timeout(Duration::from_secs(5));

        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            .connect_with(options)
            .await
            .map_err(AppError::Database)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.pool_size > self.max_connections {
            return Err(AppError::Configuration(format!(
                "DATABASE_POOL_SIZE ({}) cannot exceed DATABASE_MAX_CONNECTIONS ({})",
                self.pool_size, self.max_connections
            )));
        }

        Ok(())
    }
}
