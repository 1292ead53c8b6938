// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{FactCheckError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    ///
    /// CLI flags are applied on top by the caller.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let (path, required) = match config_path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Explicit --config must exist, the home one is optional
            .add_source(File::from(path).required(required))
            // Override with environment variables (NEWSCHECK_GEMINI__MODEL)
            .add_source(
                Environment::with_prefix("NEWSCHECK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| FactCheckError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| FactCheckError::Config(e.to_string()))
    }

    /// Reject settings that would make every fact check fail.
    pub fn validate(&self) -> Result<()> {
        if self.gemini.api_key.is_empty() {
            return Err(FactCheckError::Config(
                "Gemini API key is not set (use --api-key, GEMINI_API_KEY or gemini.api_key)"
                    .to_string(),
            ));
        }
        if self.gemini.timeout_seconds == 0 {
            return Err(FactCheckError::Config(
                "gemini.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        let base = self.gemini.api_base_url.as_str();
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(FactCheckError::Config(format!(
                "gemini.api_base_url must be an http(s) URL, got {:?}",
                base
            )));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(FactCheckError::Config("gemini.model must not be empty".to_string()));
        }
        Ok(())
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".newscheck")
            .join("config.toml")
    }
}
