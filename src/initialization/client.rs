//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the HTTP client shared by the POST and fallback paths.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - TCP connect timeout (`TCP_CONNECT_TIMEOUT_SECS`)
/// - Redirect following (Apps Script answers with a 302), up to `MAX_REDIRECT_HOPS`
///
/// No global request timeout is set: the relay supervisor bounds the POST
/// with its own window and the fallback with its grace period, and a POST
/// that outlives its window must keep running.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .user_agent(config.user_agent.clone())
        .build()
}
