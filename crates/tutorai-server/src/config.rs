//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up relative to the working directory (any supported extension)
pub const DEFAULT_CONFIG_FILE: &str = "config/server";

/// Prefix for environment overrides, e.g. `TUTORAI_PORT`
pub const ENV_PREFIX: &str = "TUTORAI";

/// Server configuration
///
/// Missing keys fall back to [`ServerConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,

    /// Attach a permissive CORS layer
    pub enable_cors: bool,

    /// Optional upper bound on `num_questions` for question generation.
    /// Unset means every count is accepted.
    pub max_questions: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            json_logs: false,
            enable_cors: true,
            max_questions: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, the optional config file and environment variables
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config: {}", e))?;

        Self::finish(config)
    }

    /// Load configuration from a single file, without environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        Self::finish(config)
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn finish(config: config::Config) -> anyhow::Result<Self> {
        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;
        parsed.validate()?;
        Ok(parsed)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.max_questions == Some(0) {
            anyhow::bail!("max_questions must be at least 1");
        }
        Ok(())
    }
}
