//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, USER_AGENT};

/// Creates an HTTP client with connection pooling and a per-request timeout.
///
/// The client identifies itself with a user agent; the Wikimedia APIs refuse
/// requests without one.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(USER_AGENT)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
