//! Read It Later API client.

use crate::config::{ClientConfig, redact};
use crate::error::{ConfigError, Error};
use crate::headers::{ParsedHeaders, parse_headers};
use crate::transport::{HttpTransport, RawResponse, Transport};
use crate::types::{ApiResponse, ERROR_HEADER, Method};
use crate::url_builder::{RequestOptions, build_url};
use std::fmt;
use tracing::{debug, trace, warn};


/// Query option carrying the API key.
pub const API_KEY_OPTION: &str = "apikey";

/// Client for the Read It Later API.
///
/// Every call performs its own round-trip and only reads the client's
/// configuration, so a shared `&ReadItLater` can serve concurrent calls.
#[derive(Clone)]
pub struct ReadItLater<T = HttpTransport> {
    transport: T,
    api_key: String,
    base_url: String,
    api_version: String,
}

impl<T> fmt::Debug for ReadItLater<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadItLater")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl ReadItLater<HttpTransport> {
    /// Creates a new client.
    ///
    /// `api_key` takes precedence over `config.api_key` unless it is empty.
    ///
    /// # Errors
    /// Returns error if no API key is available, the configuration is
    /// invalid, or the HTTP client cannot be built.
    pub fn new(api_key: &str, config: ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(config.timeout)?;
        Self::with_transport(api_key, config, transport)
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if `api_key` is empty or the HTTP client cannot be built.
    pub fn with_api_key(api_key: &str) -> Result<Self, Error> {
        Self::new(api_key, ClientConfig::default())
    }
}

impl<T: Transport> ReadItLater<T> {
    /// Creates a new client on top of a custom transport.
    ///
    /// # Errors
    /// Returns error if no API key is available or the configuration is invalid.
    pub fn with_transport(api_key: &str, config: ClientConfig, transport: T) -> Result<Self, Error> {
        config.validate()?;

        let api_key = if api_key.is_empty() {
            config.api_key
        } else {
            api_key.to_string()
        };
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }

        Ok(Self {
            transport,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.trim_matches('/').to_string(),
        })
    }

    /// Returns the API key attached to every call.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replaces the API key.
    ///
    /// # Errors
    /// Returns error if `api_key` is empty.
    pub fn set_api_key(&mut self, api_key: &str) -> Result<(), Error> {
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }
        self.api_key = api_key.to_string();
        Ok(())
    }

    /// Returns the service origin, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API version path segment.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the request URL for an API function.
    ///
    /// The API key is placed first unless `options` already carries an
    /// `apikey`, in which case the caller's value is kept.
    #[must_use]
    pub fn request_url(&self, endpoint: &str, mut options: RequestOptions) -> String {
        options.insert_first_if_absent(API_KEY_OPTION, self.api_key.as_str());
        build_url(&self.base_url, &self.api_version, endpoint, &options)
    }

    // ========================================================================
    // API Calls
    // ========================================================================

    /// Calls an API function with GET and returns the parsed response headers.
    ///
    /// The endpoint is not validated; unknown functions are reported by the
    /// service.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get(&self, endpoint: &str, options: RequestOptions) -> Result<ParsedHeaders, Error> {
        Ok(self.get_response(endpoint, options).await?.headers)
    }

    /// Calls an API function with POST and returns the parsed response headers.
    ///
    /// `params` form the urlencoded body; `options` go into the query string.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn post(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<ParsedHeaders, Error> {
        Ok(self.post_response(endpoint, params, options).await?.headers)
    }

    /// Calls an API function with GET and returns status, headers and body.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_response(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, Error> {
        log_request(Method::Get, endpoint, &options);
        let url = self.request_url(endpoint, options);
        let raw = self.transport.get(&url).await?;
        Ok(handle_response(endpoint, raw))
    }

    /// Calls an API function with POST and returns status, headers and body.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn post_response(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<ApiResponse, Error> {
        log_request(Method::Post, endpoint, &options);
        let url = self.request_url(endpoint, options);
        let raw = self.transport.post(&url, params).await?;
        Ok(handle_response(endpoint, raw))
    }
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn log_request(method: Method, endpoint: &str, options: &RequestOptions) {
    debug!(
        %method,
        endpoint,
        options = ?options.keys().collect::<Vec<_>>(),
        "calling Read It Later API"
    );
}

fn handle_response(endpoint: &str, raw: RawResponse) -> ApiResponse {
    let headers = parse_headers(&raw.headers);
    trace!(endpoint, count = headers.len(), "parsed response headers");

    if let Some(error) = headers.first(ERROR_HEADER) {
        warn!(endpoint, status = raw.status, error, "service reported an error");
    }

    ApiResponse {
        status: raw.status,
        headers,
        body: raw.body,
    }
}
