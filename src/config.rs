use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    /// Base URL of the OpenDeepSearch API; the `/api/deep-research`
    /// sub-path is appended by the client.
    pub base_url: String,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: i64 = 3000;
const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000";

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (PORT, ODS_API_URL)
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", DEFAULT_PORT)?
            .set_default("upstream.base_url", DEFAULT_UPSTREAM_URL)?
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false));

        // Plain environment variables, matching the original deployment contract
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(url) = std::env::var("ODS_API_URL") {
            builder = builder.set_override("upstream.base_url", url)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> config::builder::ConfigBuilder<config::builder::DefaultState> {
        Config::builder()
            .set_default("server.host", DEFAULT_HOST)
            .unwrap()
            .set_default("server.port", DEFAULT_PORT)
            .unwrap()
            .set_default("upstream.base_url", DEFAULT_UPSTREAM_URL)
            .unwrap()
    }

    #[test]
    fn test_default_settings() {
        let settings = base_builder()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.upstream.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_port_override_parses_string() {
        // PORT arrives as a string from the environment and must coerce to u16
        let settings = base_builder()
            .set_override("server.port", "8080")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_upstream_url_override() {
        let settings = base_builder()
            .set_override("upstream.base_url", "http://ods.internal:9000")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();
        assert_eq!(settings.upstream.base_url, "http://ods.internal:9000");
    }
}
