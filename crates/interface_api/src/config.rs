//! API configuration

use std::sync::Arc;

use core_kernel::{Clock, CoreError, FixedClock, SystemClock};
use domain_user::DEFAULT_HASH_COST;
use serde::Deserialize;

/// API configuration
///
/// Every field can be set through an `API_`-prefixed environment variable,
/// e.g. `API_PORT=5000` or `API_REFERENCE_DATE=2025-05-26`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT signing secret
    pub jwt_secret: String,
    /// Lifetime of tokens issued at login, in seconds
    pub jwt_expiration_secs: u64,
    /// bcrypt work factor for new passwords
    pub password_hash_cost: u32,
    /// Database URL; users and illustrations are kept in memory when absent
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections
    pub database_max_connections: u32,
    /// Log level
    pub log_level: String,
    /// Fixed `YYYY-MM-DD` date ages are computed against; today when absent
    pub reference_date: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            password_hash_cost: DEFAULT_HASH_COST,
            database_url: None,
            database_max_connections: 10,
            log_level: "info".to_string(),
            reference_date: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// `DATABASE_URL` is used when `API_DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let mut config: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()?;

        if config.database_url.is_none() {
            config.database_url = std::env::var("DATABASE_URL").ok();
        }
        Ok(config)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the clock the illustration service should use
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if `reference_date` is not `YYYY-MM-DD`
    pub fn clock(&self) -> Result<Arc<dyn Clock>, CoreError> {
        match &self.reference_date {
            Some(date) => Ok(Arc::new(date.parse::<FixedClock>()?)),
            None => Ok(Arc::new(SystemClock)),
        }
    }
}
