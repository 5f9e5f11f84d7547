//! Application configuration
//!
//! Loaded once at startup from an optional TOML file, then overridden by
//! environment variables. The API key is only ever read from the environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use scene_gateway_provider::{
    DEFAULT_ASSET_TYPE, DEFAULT_ITEM_TYPE, PLANET_API_BASE, ProviderConfig, RetryPolicy,
};
use serde::Deserialize;

/// Path of the config file; defaults to `config.toml` in the working directory.
pub const CONFIG_PATH_ENV: &str = "SCENE_GATEWAY_CONFIG";
pub const HOST_ENV: &str = "SCENE_GATEWAY_HOST";
pub const PORT_ENV: &str = "SCENE_GATEWAY_PORT";
/// Provider API key; required.
pub const API_KEY_ENV: &str = "PLANET_API_KEY";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub provider: ProviderSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker count; one per CPU when unset.
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub item_type: String,
    pub asset_type: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
    pub activation_grace_ms: u64,
    pub retry_activation_trigger: bool,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: PLANET_API_BASE.to_string(),
            item_type: DEFAULT_ITEM_TYPE.to_string(),
            asset_type: DEFAULT_ASSET_TYPE.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_attempts: 3,
            retry_delay_ms: 100,
            activation_grace_ms: 500,
            retry_activation_trigger: false,
        }
    }
}

impl ProviderSettings {
    pub fn to_provider_config(&self, api_key: impl Into<String>) -> ProviderConfig {
        ProviderConfig::new(api_key)
            .with_base_url(&self.base_url)
            .with_item_type(&self.item_type)
            .with_asset_type(&self.asset_type)
            .with_timeouts(
                Duration::from_secs(self.timeout_secs),
                Duration::from_secs(self.connect_timeout_secs),
            )
            .with_retry(RetryPolicy {
                max_attempts: self.max_attempts.max(1),
                delay: Duration::from_millis(self.retry_delay_ms),
            })
            .with_activation_grace(Duration::from_millis(self.activation_grace_ms))
            .with_retry_activation_trigger(self.retry_activation_trigger)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub level: String,
    pub format: LogFormat,
    /// Enables a daily rolling log file in this directory.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            directory: None,
            file_prefix: "scene-gateway.log".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads configuration, resolving environment variables through `lookup`.
    ///
    /// A config file named by [`CONFIG_PATH_ENV`] must exist; the default
    /// `config.toml` is optional.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };
        config.apply_env_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.server.workers == Some(0) {
            bail!("server.workers must be at least 1; omit it to use one worker per CPU");
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup(HOST_ENV) {
            self.server.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .parse()
                .with_context(|| format!("{PORT_ENV} must be a port number, got '{port}'"))?;
        }
        Ok(())
    }
}

/// Reads the provider API key; a missing or blank value is a startup error.
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    match lookup(API_KEY_ENV) {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => bail!("{API_KEY_ENV} must be set to a non-empty API key"),
    }
}
