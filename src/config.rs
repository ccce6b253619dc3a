//! Configuration loading: optional TOML file plus SYNAPSE_* environment overlay.
//!
//! `SYNAPSE_AUTH_TOKEN` populates `auth_token`; nested keys use `__` as the
//! separator (`SYNAPSE_LOGGING__LEVEL` -> `logging.level`).

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_REPO_ENDPOINT: &str = "https://repo-prod.prod.sagebase.org/repo/v1";
pub const DEFAULT_FILE_ENDPOINT: &str = "https://repo-prod.prod.sagebase.org/file/v1";

/// Catalog connection settings shared by all utilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynapseConfig {
    /// Personal access token. Required, from the config file or SYNAPSE_AUTH_TOKEN.
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Base URL of the repository service.
    #[serde(default = "default_repo_endpoint")]
    pub repo_endpoint: String,

    /// Base URL of the file-handle service.
    #[serde(default = "default_file_endpoint")]
    pub file_endpoint: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_repo_endpoint() -> String {
    DEFAULT_REPO_ENDPOINT.to_string()
}

fn default_file_endpoint() -> String {
    DEFAULT_FILE_ENDPOINT.to_string()
}

impl Default for SynapseConfig {
    fn default() -> Self {
        Self {
            auth_token: None,
            repo_endpoint: default_repo_endpoint(),
            file_endpoint: default_file_endpoint(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an optional file and the environment.
    ///
    /// A named file that is missing or malformed is an error; with no file,
    /// the environment overlay alone must supply the auth token.
    pub fn load(config_path: Option<&Path>) -> Result<SynapseConfig, ApiError> {
        let mut builder = Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix("SYNAPSE")
                .separator("__")
                .try_parsing(true),
        );
        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }

    /// Fail unless an auth token is present.
    pub fn require_token(config: &SynapseConfig) -> Result<String, ApiError> {
        match config.auth_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => Err(ApiError::AuthError(
                "No auth token: set SYNAPSE_AUTH_TOKEN or pass --config".to_string(),
            )),
        }
    }
}
