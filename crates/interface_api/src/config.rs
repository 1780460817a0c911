//! API configuration

use serde::Deserialize;

use infra_db::DatabaseConfig;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// SQLite connection string
    pub database_url: String,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// Log level
    pub log_level: String,
    /// Load the seed catalog into an empty database on startup
    pub seed_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "sqlite://movies.db".to_string(),
            max_connections: 10,
            log_level: "info".to_string(),
            seed_data: true,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings for the configured database
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.database_url).max_connections(self.max_connections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();

        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.seed_data);
        assert_eq!(config.database_config().max_connections, 10);
    }

    #[test]
    fn test_database_config_uses_url() {
        let config = ApiConfig {
            database_url: "sqlite::memory:".to_string(),
            ..ApiConfig::default()
        };

        assert!(config.database_config().is_in_memory());
    }
}
