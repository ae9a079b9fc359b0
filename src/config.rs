//! Configuration management for Foliochat
//!
//! This module handles loading, parsing, and validating configuration from a
//! YAML file, with serde-supplied defaults for every field so a missing or
//! partial file still yields a usable configuration.

use crate::error::{Result, FoliochatError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Foliochat
///
/// Holds the proxy server settings, the completion provider settings, and the
/// chat-facing settings shared by the terminal client and the fallback path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Chat proxy server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Chat client and fallback configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Chat proxy server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Completion provider configuration
///
/// The `api_base` is overridable so tests can point the provider at a mock
/// server. The API key itself is never stored here; only the name of the
/// environment variable it is read from at request time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL for the OpenAI-compatible completions API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Completion token cap
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Nucleus sampling parameter
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Wall-clock budget for one proxied request (seconds)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_api_base() -> String {
    "https://api.together.xyz/v1".to_string()
}

fn default_model() -> String {
    "mistralai/Mistral-7B-Instruct-v0.1".to_string()
}

fn default_temperature() -> f64 {
    0.3
}

fn default_max_tokens() -> u32 {
    500
}

fn default_top_p() -> f64 {
    0.9
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_api_key_env() -> String {
    "TOGETHER_API_KEY".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            timeout_seconds: default_timeout_seconds(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Chat client and fallback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the chat proxy, used by the terminal client
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,

    /// Contact address included in the proxy's fallback message
    #[serde(default = "default_fallback_contact")]
    pub fallback_contact: String,
}

fn default_proxy_url() -> String {
    "http://127.0.0.1:8787".to_string()
}

fn default_fallback_contact() -> String {
    "saicharansripada5@gmail.com".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            proxy_url: default_proxy_url(),
            fallback_contact: default_fallback_contact(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// Falls back to defaults when the file does not exist, so the binary
    /// runs without any configuration on disk.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    ///
    /// # Examples
    ///
    /// ```
    /// use foliochat::config::Config;
    ///
    /// let config = Config::load("does/not/exist.yaml").unwrap();
    /// assert_eq!(config.server.port, 8787);
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a `FoliochatError::Config` describing the first invalid field
    ///
    /// # Examples
    ///
    /// ```
    /// use foliochat::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(FoliochatError::Config("server.port must be non-zero".to_string()).into());
        }
        if self.provider.api_base.is_empty() {
            return Err(
                FoliochatError::Config("provider.api_base must not be empty".to_string()).into(),
            );
        }
        if self.provider.model.is_empty() {
            return Err(
                FoliochatError::Config("provider.model must not be empty".to_string()).into(),
            );
        }
        if !(0.0..=2.0).contains(&self.provider.temperature) {
            return Err(FoliochatError::Config(format!(
                "provider.temperature must be in [0.0, 2.0], got {}",
                self.provider.temperature
            ))
            .into());
        }
        if !(0.0..=1.0).contains(&self.provider.top_p) {
            return Err(FoliochatError::Config(format!(
                "provider.top_p must be in [0.0, 1.0], got {}",
                self.provider.top_p
            ))
            .into());
        }
        if self.provider.max_tokens == 0 {
            return Err(
                FoliochatError::Config("provider.max_tokens must be non-zero".to_string()).into(),
            );
        }
        if self.provider.timeout_seconds == 0 {
            return Err(FoliochatError::Config(
                "provider.timeout_seconds must be non-zero".to_string(),
            )
            .into());
        }
        if self.provider.api_key_env.is_empty() {
            return Err(
                FoliochatError::Config("provider.api_key_env must not be empty".to_string())
                    .into(),
            );
        }
        if self.chat.proxy_url.is_empty() {
            return Err(
                FoliochatError::Config("chat.proxy_url must not be empty".to_string()).into(),
            );
        }
        Ok(())
    }
}
