//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream Budget Service configuration.
    pub budget_service: BudgetServiceConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Budget Service (remote REST backend) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetServiceConfig {
    /// Base URL, e.g. `https://api.example.com/v1`.
    pub base_url: String,
    /// Bearer token sent with every request.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BUDGETLENS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                (
                    "BUDGETLENS__BUDGET_SERVICE__BASE_URL",
                    Some("http://localhost:3000/api"),
                ),
                ("BUDGETLENS__BUDGET_SERVICE__TIMEOUT_SECS", Some("3")),
                ("BUDGETLENS__SERVER__PORT", Some("9090")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.budget_service.base_url, "http://localhost:3000/api");
                assert_eq!(config.budget_service.timeout_secs, 3);
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.server.host, "0.0.0.0");
            },
        );
    }

    #[test]
    fn test_defaults_when_optional_values_missing() {
        temp_env::with_vars(
            [
                (
                    "BUDGETLENS__BUDGET_SERVICE__BASE_URL",
                    Some("http://localhost:3000"),
                ),
                ("BUDGETLENS__BUDGET_SERVICE__TIMEOUT_SECS", None),
                ("BUDGETLENS__BUDGET_SERVICE__API_TOKEN", None),
                ("BUDGETLENS__SERVER__PORT", None),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.budget_service.timeout_secs, 10);
                assert!(config.budget_service.api_token.is_none());
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_missing_base_url_fails() {
        temp_env::with_vars(
            [("BUDGETLENS__BUDGET_SERVICE__BASE_URL", None::<&str>)],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }
}
