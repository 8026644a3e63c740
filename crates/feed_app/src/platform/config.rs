//! Application configuration: a RON file overlaid with environment variables.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use feed_gateway::GatewaySettings;
use feed_logging::feed_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GatewayMode {
    #[default]
    Rest,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gateway: GatewayMode,
    pub base_url: String,
    pub api_key: Option<String>,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = GatewaySettings::default();
        Self {
            gateway: GatewayMode::default(),
            base_url: settings.base_url,
            api_key: None,
            connect_timeout_ms: settings.connect_timeout.as_millis() as u64,
            request_timeout_ms: settings.request_timeout.as_millis() as u64,
        }
    }
}

impl AppConfig {
    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            ..GatewaySettings::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("{var} has unsupported value {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Loads `path` (defaults when it does not exist) and applies `FEED_*`
/// environment overrides.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = load_file(path)?;
    apply_env(config, |var| std::env::var(var).ok())
}

pub(crate) fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    feed_info!("Loaded configuration from {:?}", path);
    Ok(config)
}

pub(crate) fn apply_env(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    if let Some(v) = lookup("FEED_BASE_URL") {
        config.base_url = v;
    }
    if let Some(v) = lookup("FEED_API_KEY") {
        config.api_key = Some(v);
    }
    if let Some(v) = lookup("FEED_GATEWAY") {
        config.gateway = match v.to_ascii_lowercase().as_str() {
            "rest" => GatewayMode::Rest,
            "memory" => GatewayMode::Memory,
            _ => {
                return Err(ConfigError::InvalidValue {
                    var: "FEED_GATEWAY",
                    value: v,
                })
            }
        };
    }
    Ok(config)
}
