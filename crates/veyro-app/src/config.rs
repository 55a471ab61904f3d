//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// SQLite URL of the idea store (e.g. `sqlite://veyro.db?mode=rwc`).
    /// Unset means no persistence: the app runs on the in-memory store.
    pub database_url: Option<String>,
    pub database_max_connections: Option<u32>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("VEYRO_DATABASE_URL").ok(),
            database_max_connections: env::var("VEYRO_DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }
}
