//! Response types and well-known names of the Read It Later API.

use crate::headers::ParsedHeaders;
use serde::Serialize;

#[cfg(test)]
mod tests;

/// Well-known v2 API functions.
///
/// Endpoints are plain strings; any name is accepted by the client and
/// these constants only spare callers the typing.
pub mod endpoints {
    /// Add a single page to a user's list.
    pub const ADD: &str = "add";
    /// Add, mark read, or change titles and tags of several pages.
    pub const SEND: &str = "send";
    /// Retrieve statistics about a user's list.
    pub const STATS: &str = "stats";
    /// Retrieve a user's list.
    pub const GET: &str = "get";
    /// Verify a username and password.
    pub const AUTH: &str = "auth";
    /// Create a new user account.
    pub const SIGNUP: &str = "signup";
    /// Check the rate limits of the API key.
    pub const API: &str = "api";
}

/// Header carrying the service's error description.
pub const ERROR_HEADER: &str = "X-Error";

/// HTTP verb used for an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Full response of an API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed response headers.
    pub headers: ParsedHeaders,
    /// Response body, empty when absent.
    pub body: String,
}

impl ApiResponse {
    /// Returns `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the error description reported by the service, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.headers.first(ERROR_HEADER)
    }

    /// Returns the rate limit counters reported by the service.
    pub fn rate_limits(&self) -> RateLimits {
        RateLimits::from_headers(&self.headers)
    }
}

/// Rate limit counters reported in `X-Limit-*` headers.
///
/// User limits apply per user account, key limits per API key. Missing or
/// unparsable headers are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RateLimits {
    /// Calls allowed per user per window.
    pub user_limit: Option<u32>,
    /// Calls left for the user in the current window.
    pub user_remaining: Option<u32>,
    /// Seconds until the user window resets.
    pub user_reset: Option<u64>,
    /// Calls allowed per API key per window.
    pub key_limit: Option<u32>,
    /// Calls left for the API key in the current window.
    pub key_remaining: Option<u32>,
    /// Seconds until the key window resets.
    pub key_reset: Option<u64>,
}

impl RateLimits {
    /// Reads the counters from parsed headers.
    pub fn from_headers(headers: &ParsedHeaders) -> Self {
        fn number<T: std::str::FromStr>(headers: &ParsedHeaders, name: &str) -> Option<T> {
            headers.first(name).and_then(|v| v.trim().parse().ok())
        }

        Self {
            user_limit: number(headers, "X-Limit-User-Limit"),
            user_remaining: number(headers, "X-Limit-User-Remaining"),
            user_reset: number(headers, "X-Limit-User-Reset"),
            key_limit: number(headers, "X-Limit-Key-Limit"),
            key_remaining: number(headers, "X-Limit-Key-Remaining"),
            key_reset: number(headers, "X-Limit-Key-Reset"),
        }
    }

    /// Returns `true` if either the user or the key allowance is used up.
    pub fn is_exhausted(&self) -> bool {
        self.user_remaining == Some(0) || self.key_remaining == Some(0)
    }
}
