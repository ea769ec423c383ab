//! Configuration constants.
//!
//! Timings, endpoint defaults and HTTP client limits used throughout the relay.

use std::time::Duration;

/// Environment variable holding the Apps Script web app URL.
pub const ENDPOINT_ENV_VAR: &str = "GOOGLE_SHEETS_URL";

/// Deployment default used when no endpoint is configured.
///
/// This is the web app URL the contact form shipped with; it is not a secret
/// and not a security boundary. Override it via `GOOGLE_SHEETS_URL` or
/// `--endpoint` for any other deployment.
pub const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbxAeqtd6po7ou_e7tQP47Uv9yZ-uEFigKjnIaN1QxgoNkS-rjsNU7YERW4SDjMBUlmI/exec";

// Relay timings
/// How long the POST may run before the GET fallback fires.
pub const POST_TIMEOUT: Duration = Duration::from_secs(5);
/// How long the fallback GET transport is kept alive before it is torn down.
/// Slow deliveries past this point are truncated.
pub const FALLBACK_GRACE: Duration = Duration::from_secs(3);
/// Fixed delay after dispatch before the attempt is reported as submitted.
/// This smooths the UI; it is not a confirmation of remote receipt.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1500);
/// How long a success outcome stays visible before reverting to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

// HTTP client
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Maximum number of redirect hops to follow.
/// Apps Script answers a POST with a 302 to a googleusercontent.com URL.
pub const MAX_REDIRECT_HOPS: usize = 10;
/// Maximum response body size kept for ack parsing and logging (64KB)
pub const MAX_ACK_BODY_SIZE: usize = 64 * 1024;

/// Default User-Agent string for relay requests.
pub const DEFAULT_USER_AGENT: &str = concat!("contact_relay/", env!("CARGO_PKG_VERSION"));

/// Maximum endpoint URL length accepted from configuration.
pub const MAX_ENDPOINT_URL_LENGTH: usize = 2048;
