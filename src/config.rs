//! Client configuration, optionally loaded from a TOML file.

use crate::error::ConfigError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;


/// Default origin of the Read It Later service.
pub const DEFAULT_BASE_URL: &str = "https://readitlaterlist.com";

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "v2";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration.
///
/// ```toml
/// api_key = "0123456789abcdef"
/// base_url = "https://readitlaterlist.com"
/// api_version = "v2"
/// timeout_secs = 30
/// ```
#[derive(Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// API key used when none is passed to the client constructor.
    pub api_key: String,
    /// Service origin (e.g., "https://readitlaterlist.com").
    pub base_url: String,
    /// API version path segment (e.g., "v2").
    pub api_version: String,
    /// Request timeout.
    #[serde(rename = "timeout_secs", deserialize_with = "deserialize_secs")]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a default configuration carrying the given API key.
    pub fn with_api_key(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            ..Default::default()
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read, parsed or validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed or validated.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// The API key is not checked here; the client constructor decides
    /// whether a key is available.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for an unusable base URL or API version.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::InvalidValue(format!("base_url {:?}: {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue(format!(
                "base_url {:?} must use http or https",
                self.base_url
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::InvalidValue(format!(
                "base_url {:?} must not carry a query or fragment",
                self.base_url
            )));
        }

        let version = self.api_version.trim_matches('/');
        if version.is_empty() {
            return Err(ConfigError::InvalidValue(
                "api_version cannot be empty".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue(
                "timeout_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

fn deserialize_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

/// Masks all but the last four characters of a secret.
pub(crate) fn redact(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
