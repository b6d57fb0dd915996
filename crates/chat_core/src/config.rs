//! Backend endpoint configuration
//!
//! The endpoint is an explicit value injected into the client constructor.
//! `ClientConfig::load` keeps the old ambient behavior available for binaries:
//! `config.toml` first, environment override second.

use serde::{Deserialize, Serialize};

const CONFIG_FILE_PATH: &str = "config.toml";
const ENDPOINT_ENV_VAR: &str = "MKIT_BACKEND_API_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the MKit backend, e.g. `http://localhost:8081`.
    pub api_endpoint: String,
}

impl ClientConfig {
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
        }
    }

    /// Read `config.toml` if present, then let the environment override it.
    pub fn load() -> Self {
        let mut config = Self::new("");

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                match toml::from_str::<ClientConfig>(&content) {
                    Ok(file_config) => config = file_config,
                    Err(err) => log::warn!("Failed to parse {CONFIG_FILE_PATH}: {err}"),
                }
            }
        }

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            config.api_endpoint = endpoint;
        }
        config
    }

    /// Endpoint with any trailing slash removed, ready for path joining.
    pub fn base_url(&self) -> &str {
        self.api_endpoint.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8081/");
        assert_eq!(config.base_url(), "http://localhost:8081");
    }

    #[test]
    fn base_url_keeps_clean_endpoint() {
        let config = ClientConfig::new("http://localhost:8081");
        assert_eq!(config.base_url(), "http://localhost:8081");
    }

    #[test]
    fn config_parses_from_toml() {
        let config: ClientConfig =
            toml::from_str(r#"api_endpoint = "https://chat.example.com""#).unwrap();
        assert_eq!(config.api_endpoint, "https://chat.example.com");
    }
}
