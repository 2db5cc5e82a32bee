//! Integration tests for the Read It Later client.
//!
//! The tests run against [`StubServer`], an in-process stand-in for the
//! service bound to an ephemeral localhost port. It echoes what it received
//! back as response headers, the way the real service answers in headers.

use axum::Router;
use axum::http::header::{CONTENT_TYPE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use read_it_later::{ClientConfig, ReadItLater};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Non-ASCII page title the stub reports in `X-Title`.
pub const PAGE_TITLE: &str = "Café résumé";

/// API key accepted by the stub.
pub const VALID_API_KEY: &str = "abc123";

/// Error text the stub reports for a wrong API key.
pub const INVALID_KEY_ERROR: &str = "Invalid API key";

/// Installs a test-friendly tracing subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "read_it_later=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// In-process stub of the service.
pub struct StubServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Binds the stub to an ephemeral localhost port and starts serving.
    ///
    /// # Errors
    /// Returns error if the listener cannot be bound.
    pub async fn start() -> std::io::Result<Self> {
        init_tracing();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = Router::new().fallback(echo);
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        info!("stub service listening on {}", addr);

        Ok(Self { addr, handle })
    }

    /// Base URL of the stub.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Creates a client pointed at the stub using [`VALID_API_KEY`].
    ///
    /// # Errors
    /// Returns error if client creation fails.
    pub fn client(&self) -> Result<ReadItLater, read_it_later::Error> {
        create_test_client(&self.base_url(), VALID_API_KEY)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Creates a test client configured for `base_url`.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client(base_url: &str, api_key: &str) -> Result<ReadItLater, read_it_later::Error> {
    ReadItLater::new(
        api_key,
        ClientConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(10),
            ..Default::default()
        },
    )
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    let query = uri.query().unwrap_or_default();
    let api_key = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("apikey="))
        .unwrap_or_default();

    if api_key != VALID_API_KEY {
        let mut response = (StatusCode::UNAUTHORIZED, "").into_response();
        response
            .headers_mut()
            .insert("x-error", HeaderValue::from_static(INVALID_KEY_ERROR));
        return response;
    }

    if uri.path() == "/v2/moved" {
        let mut response = StatusCode::FOUND.into_response();
        response
            .headers_mut()
            .insert(LOCATION, HeaderValue::from_static("/v2/api"));
        return response;
    }

    let mut response = (StatusCode::OK, "OK").into_response();
    let out = response.headers_mut();
    out.insert(name("x-echo-method"), value(method.as_str()));
    out.insert(name("x-echo-path"), value(uri.path()));
    out.insert(name("x-echo-query"), value(query));
    if !body.is_empty() {
        out.insert(name("x-echo-body"), value(&body));
    }
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        out.insert(name("x-echo-content-type"), content_type.clone());
    }
    out.insert(name("x-limit-user-limit"), HeaderValue::from_static("120"));
    out.insert(name("x-limit-user-remaining"), HeaderValue::from_static("119"));
    out.insert(name("x-limit-user-reset"), HeaderValue::from_static("3600"));
    out.insert(name("x-limit-key-limit"), HeaderValue::from_static("10000"));
    out.insert(name("x-limit-key-remaining"), HeaderValue::from_static("9999"));
    out.insert(name("x-limit-key-reset"), HeaderValue::from_static("1800"));
    if let Ok(title) = HeaderValue::from_bytes(PAGE_TITLE.as_bytes()) {
        out.insert(name("x-title"), title);
    }
    out.append(SET_COOKIE, HeaderValue::from_static("a=1"));
    out.append(SET_COOKIE, HeaderValue::from_static("b=2"));
    response
}

fn name(s: &'static str) -> HeaderName {
    HeaderName::from_static(s)
}

fn value(s: &str) -> HeaderValue {
    HeaderValue::from_str(s).unwrap_or_else(|_| HeaderValue::from_static("invalid"))
}
