//! HTTP client library for the Read It Later bookmarking API.
//!
//! The service reports results almost entirely through response headers, so
//! every call returns the response headers parsed into a [`ParsedHeaders`]
//! map. The API key is attached to every request as the `apikey` query
//! parameter.
//!
//! # Example
//!
//! ```no_run
//! use read_it_later::{ClientConfig, ReadItLater, RequestOptions, endpoints};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), read_it_later::Error> {
//!     let client = ReadItLater::new("0123456789abcdef", ClientConfig::default())?;
//!
//!     // Check the rate limits of the key
//!     let headers = client.get(endpoints::API, RequestOptions::new()).await?;
//!     println!("Remaining: {:?}", headers.first("X-Limit-Key-Remaining"));
//!
//!     // Save a page
//!     let options = RequestOptions::new()
//!         .with("username", "reader")
//!         .with("password", "secret")
//!         .with("url", "https://www.rust-lang.org/");
//!     client.post(endpoints::ADD, &[], options).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod headers;
mod transport;
mod types;
mod url_builder;

pub use client::{API_KEY_OPTION, ReadItLater};
pub use config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ConfigError, Error};
pub use headers::{HeaderValue, ParsedHeaders, normalize_header_name, parse_headers};
pub use transport::{FORM_CONTENT_TYPE, HttpTransport, RawResponse, Transport, encode_form};
pub use types::*;
pub use url_builder::{OptionValue, RequestOptions, build_url};
