//! Server configuration

use anyhow::Context;
use ruleval_sdk::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file, without extension
pub const DEFAULT_CONFIG_FILE: &str = "config/server";

/// Prefix of environment variables overriding the config file
pub const ENV_PREFIX: &str = "RULEVAL";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level, used when `RUST_LOG` is not set
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Rule engine limits
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, the config file and environment variables
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false));
        Self::build(builder)
    }

    /// Load configuration from a specific file, still layered under the environment
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let builder = config::Config::builder().add_source(config::File::from(path));
        Self::build(builder)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        let cfg = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        let config: Self = cfg
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;
        config
            .engine
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid engine config: {}", e))?;

        Ok(config)
    }

    /// Filter directives applied when `RUST_LOG` is not set
    pub fn log_directives(&self) -> String {
        let level = &self.log_level;
        format!(
            "ruleval_server={level},ruleval_sdk={level},ruleval_runtime={level},\
             ruleval_parser={level},tower_http=debug"
        )
    }

    /// Socket address the server binds
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
