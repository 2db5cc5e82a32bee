//! HTTP transport.
//!
//! A [`Transport`] performs exactly one HTTP round-trip per call and hands
//! back the status, the raw header block and the body. It never follows
//! redirects and never retries.

use crate::error::Error;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::redirect::Policy;
use std::fmt::Write as _;
use std::time::Duration;
use tracing::debug;


/// Media type of POST bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Raw HTTP response as returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Header block: the status line followed by one `Name: value` line per
    /// header, CRLF separated.
    pub headers: String,
    /// Response body, empty when absent.
    pub body: String,
}

impl RawResponse {
    /// Renders a header block from a status line and header pairs.
    pub fn header_block<'a, I>(status_line: &str, headers: I) -> String
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut block = String::new();
        let _ = write!(block, "{}\r\n", status_line);
        for (name, value) in headers {
            let _ = write!(block, "{}: {}\r\n", name, value);
        }
        block.push_str("\r\n");
        block
    }

    async fn read(resp: reqwest::Response) -> Result<Self, Error> {
        let status = resp.status();
        let status_line = format!("{:?} {}", resp.version(), status);
        let headers = {
            let pairs: Vec<(&str, String)> = resp
                .headers()
                .iter()
                .map(|(name, value)| (name.as_str(), decode_header_value(value)))
                .collect();
            Self::header_block(
                &status_line,
                pairs.iter().map(|(name, value)| (*name, value.as_str())),
            )
        };
        debug!(status = status.as_u16(), "received response");
        let body = resp.text().await?;

        Ok(Self {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

/// Executes single HTTP requests.
pub trait Transport: Send + Sync {
    /// Issues a GET request.
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, Error>> + Send;

    /// Issues a POST request with `params` as an urlencoded form body.
    fn post(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> impl Future<Output = Result<RawResponse, Error>> + Send;
}

/// [`Transport`] backed by `reqwest`, with certificate verification enabled.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with the given request timeout.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self { client })
    }

}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, Error> {
        let resp = self.client.get(url).send().await?;
        RawResponse::read(resp).await
    }

    async fn post(&self, url: &str, params: &[(&str, &str)]) -> Result<RawResponse, Error> {
        let body = encode_form(params)?;
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
            .body(body)
            .send()
            .await?;
        RawResponse::read(resp).await
    }
}

/// Renders a header value as text, replacing invalid UTF-8 sequences.
fn decode_header_value(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

/// Encodes form parameters as an `application/x-www-form-urlencoded` body.
///
/// # Errors
/// Returns error if the parameters cannot be serialized.
pub fn encode_form(params: &[(&str, &str)]) -> Result<String, Error> {
    Ok(serde_urlencoded::to_string(params)?)
}
