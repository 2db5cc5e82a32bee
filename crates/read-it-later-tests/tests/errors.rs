//! Error reporting against the stub service.

use read_it_later::{ConfigError, Error, RequestOptions, endpoints};
use read_it_later_tests::{INVALID_KEY_ERROR, StubServer, create_test_client};

#[tokio::test]
async fn test_wrong_api_key_reported_in_headers() {
    let server = StubServer::start().await.expect("Failed to start stub");
    let client = create_test_client(&server.base_url(), "wrong").expect("Failed to create client");

    let resp = client
        .get_response(endpoints::API, RequestOptions::new())
        .await
        .expect("request should complete");

    assert_eq!(resp.status, 401);
    assert_eq!(resp.error_message(), Some(INVALID_KEY_ERROR));
}

#[tokio::test]
async fn test_caller_api_key_overrides_client_key() {
    let server = StubServer::start().await.expect("Failed to start stub");
    let client = server.client().expect("Failed to create client");

    let headers = client
        .get(endpoints::API, RequestOptions::new().with("apikey", "custom"))
        .await
        .expect("request should complete");

    assert_eq!(headers.first("X-Error"), Some(INVALID_KEY_ERROR));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let base_url = format!("http://{}", listener.local_addr().expect("Failed to get address"));
    drop(listener);

    let client = create_test_client(&base_url, "abc123").expect("Failed to create client");
    let err = client
        .get(endpoints::API, RequestOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn test_missing_api_key_is_configuration_error() {
    let err = create_test_client("http://127.0.0.1:1", "").unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::MissingApiKey)));
}
