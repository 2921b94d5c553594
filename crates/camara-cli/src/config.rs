//! Client configuration loaded from environment variables.

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Number verification client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NumberVerificationConfig {
    /// Number Verification API base URL (`API_BASE_URL`)
    #[serde(default = "default_number_verification_url")]
    pub api_base_url: String,

    /// Shared settings
    #[serde(flatten)]
    pub common: CommonConfig,
}

/// Roaming / device status client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RoamingConfig {
    /// Device Status API base URL (`CAMARA_API_BASE_URL`)
    #[serde(default = "default_device_status_url")]
    pub camara_api_base_url: String,

    /// Shared settings
    #[serde(flatten)]
    pub common: CommonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    /// OAuth access token (`OAUTH_TOKEN`)
    #[serde(default)]
    pub oauth_token: Option<SecretString>,

    /// Request timeout, unset means wait indefinitely (`REQUEST_TIMEOUT`)
    #[serde(default, with = "humantime_serde")]
    pub request_timeout: Option<Duration>,

    /// Log level (`LOG_LEVEL`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl CommonConfig {
    /// Token in the form the clients take.
    pub fn token(&self) -> Option<String> {
        self.oauth_token
            .as_ref()
            .map(|t| t.expose_secret().to_string())
    }
}

// Default value functions
fn default_number_verification_url() -> String {
    "https://api.example.com/number-verification/v0".into()
}

fn default_device_status_url() -> String {
    "http://localhost:9091/device-status/v0".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl NumberVerificationConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        load_from_process_env()
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        load_from_vars(vars)
    }
}

impl RoamingConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        load_from_process_env()
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        load_from_vars(vars)
    }
}

fn load_from_process_env<T: DeserializeOwned>() -> Result<T> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    build(config::Environment::default())
}

fn load_from_vars<T, I, K, V>(vars: I) -> Result<T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let source: config::Map<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();

    build(config::Environment::default().source(Some(source)))
}

fn build<T: DeserializeOwned>(environment: config::Environment) -> Result<T> {
    let config = config::Config::builder()
        .add_source(
            environment
                .separator("__")
                // Phone numbers and tokens must stay strings.
                .try_parsing(false),
        )
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}
