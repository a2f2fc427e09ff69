//! Application configuration loaded from environment variables.
//!
//! The token service and password hasher receive their settings from this
//! struct at construction; nothing reads the environment after startup.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// JWT signing secret (HS256)
    pub jwt_secret: String,
    /// Access token lifetime in minutes
    pub jwt_access_expire_minutes: i64,
    /// Refresh token lifetime in days
    pub jwt_refresh_expire_days: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for Config {
    /// Default config for testing only. Uses a low bcrypt cost so test
    /// suites don't burn CPU on hashing.
    fn default() -> Self {
        Self {
            port: 8080,
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test_jwt_secret_32_bytes_minimum!".to_string(),
            jwt_access_expire_minutes: 30,
            jwt_refresh_expire_days: 7,
            bcrypt_cost: 4,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a development default; set JWT_SECRET in
    /// production.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://travel.db".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "change-me-in-production".to_string()),
            jwt_access_expire_minutes: parse_env("JWT_ACCESS_EXPIRE_MINUTES", 30)?,
            jwt_refresh_expire_days: parse_env("JWT_REFRESH_EXPIRE_DAYS", 7)?,
            bcrypt_cost: parse_env("BCRYPT_COST", 12)?,
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Malformed environment variable: {0}")]
    Invalid(&'static str),
}
