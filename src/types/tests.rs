//! Unit tests for types module.

use super::*;
use crate::headers::parse_headers;

fn response(status: u16, raw_headers: &str) -> ApiResponse {
    ApiResponse {
        status,
        headers: parse_headers(raw_headers),
        body: String::new(),
    }
}

// ============================================================================
// Method Tests
// ============================================================================

#[test]
fn test_method_display() {
    assert_eq!(format!("{}", Method::Get), "GET");
    assert_eq!(format!("{}", Method::Post), "POST");
}

// ============================================================================
// ApiResponse Tests
// ============================================================================

#[test]
fn test_api_response_success() {
    let resp = response(200, "HTTP/1.1 200 OK\r\nStatus: 200 OK\r\n");

    assert!(resp.is_success());
    assert_eq!(resp.error_message(), None);
}

#[test]
fn test_api_response_error_message() {
    let resp = response(
        401,
        "HTTP/1.1 401 Unauthorized\r\nx-error: Username and/or password is incorrect\r\n",
    );

    assert!(!resp.is_success());
    assert_eq!(
        resp.error_message(),
        Some("Username and/or password is incorrect")
    );
}

#[test]
fn test_api_response_serialization() {
    let resp = response(200, "X-Status: 1\r\n");

    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["status"], 200);
    assert_eq!(json["headers"]["X-Status"], "1");
    assert_eq!(json["body"], "");
}

// ============================================================================
// RateLimits Tests
// ============================================================================

#[test]
fn test_rate_limits_from_headers() {
    let resp = response(
        200,
        "X-Limit-User-Limit: 120\r\n\
         X-Limit-User-Remaining: 119\r\n\
         X-Limit-User-Reset: 3600\r\n\
         x-limit-key-limit: 10000\r\n\
         x-limit-key-remaining: 9876\r\n\
         x-limit-key-reset: 1800\r\n",
    );

    let limits = resp.rate_limits();
    assert_eq!(limits.user_limit, Some(120));
    assert_eq!(limits.user_remaining, Some(119));
    assert_eq!(limits.user_reset, Some(3600));
    assert_eq!(limits.key_limit, Some(10000));
    assert_eq!(limits.key_remaining, Some(9876));
    assert_eq!(limits.key_reset, Some(1800));
    assert!(!limits.is_exhausted());
}

#[test]
fn test_rate_limits_missing_and_malformed() {
    let limits = RateLimits::from_headers(&parse_headers("X-Limit-User-Limit: lots\r\n"));

    assert_eq!(limits, RateLimits::default());
}

#[test]
fn test_rate_limits_exhausted() {
    let limits = RateLimits::from_headers(&parse_headers("X-Limit-Key-Remaining: 0\r\n"));

    assert!(limits.is_exhausted());
}

#[test]
fn test_endpoint_names() {
    assert_eq!(endpoints::ADD, "add");
    assert_eq!(endpoints::GET, "get");
    assert_eq!(endpoints::API, "api");
}
