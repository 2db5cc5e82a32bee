//! Error types for the Read It Later client.

use thiserror::Error;


/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key was supplied, neither explicitly nor through the configuration.
    #[error(
        "invalid API key: provide an API key when creating the client or set `api_key` in the configuration"
    )]
    MissingApiKey,

    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Client error types.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be configured.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP round-trip could not complete.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Form parameters could not be encoded.
    #[error("form encoding failed: {0}")]
    FormEncoding(#[from] serde_urlencoded::ser::Error),
}

impl Error {
    /// Returns `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns `true` if the request failed in the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
