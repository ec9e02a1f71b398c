use crate::core::amount::MAX_SCALE;
use crate::core::{AppError, Result};
use crate::modules::summaries::services::SummaryOptions;
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: String,
}

/// Report shape and boundary behaviour for `GET /summary/{date}`
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    /// Run the commission metrics and emit the `commissions` block
    pub include_commissions: bool,
    /// Round decimal outputs to this many places; unset emits values as computed
    pub decimal_places: Option<u32>,
    /// Answer invalid dates with 400 instead of 200
    pub strict_status: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            include_commissions: true,
            decimal_places: None,
            strict_status: false,
        }
    }
}

impl SummaryConfig {
    pub fn from_env() -> Result<Self> {
        let decimal_places = match env::var("SUMMARY_DECIMAL_PLACES") {
            Ok(value) if !value.trim().is_empty() => Some(value.trim().parse().map_err(|_| {
                AppError::Configuration("Invalid SUMMARY_DECIMAL_PLACES".to_string())
            })?),
            _ => None,
        };

        Ok(SummaryConfig {
            include_commissions: env_flag("SUMMARY_INCLUDE_COMMISSIONS", true)?,
            decimal_places,
            strict_status: env_flag("SUMMARY_STRICT_STATUS", false)?,
        })
    }

    pub fn options(&self) -> SummaryOptions {
        SummaryOptions {
            include_commissions: self.include_commissions,
            decimal_places: self.decimal_places,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            summary: SummaryConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.database.validate()?;

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "SERVER_WORKERS must be greater than 0".to_string(),
            ));
        }

        if !matches!(self.app.log_format.as_str(), "pretty" | "json") {
            return Err(AppError::Configuration(format!(
                "Unknown LOG_FORMAT '{}' (expected 'pretty' or 'json')",
                self.app.log_format
            )));
        }

        if let Some(dp) = self.summary.decimal_places {
            if dp > MAX_SCALE {
                return Err(AppError::Configuration(format!(
                    "SUMMARY_DECIMAL_PLACES cannot exceed {}",
                    MAX_SCALE
                )));
            }
        }

        Ok(())
    }
}

fn env_flag(name: &str, default: bool) -> Result<bool> {
    match env::var(name) {
        Ok(value) => parse_flag(&value)
            .ok_or_else(|| AppError::Configuration(format!("Invalid {}", name))),
        Err(_) => Ok(default),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
