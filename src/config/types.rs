//! Configuration types.
//!
//! This module defines the library configuration, the relay timings and the
//! logging enums shared with the CLI.

use std::time::Duration;

use clap::ValueEnum;
use url::Url;

use crate::config::constants::{
    DEFAULT_ENDPOINT_URL, DEFAULT_USER_AGENT, FALLBACK_GRACE, MAX_ENDPOINT_URL_LENGTH,
    POST_TIMEOUT, SETTLE_DELAY, SUCCESS_DISPLAY,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Timers driving a single relay attempt.
///
/// The defaults mirror the contact form's behavior. Tests shorten them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimings {
    /// POST window before the GET fallback fires
    pub post_timeout: Duration,
    /// Lifetime of the fallback GET transport
    pub fallback_grace: Duration,
    /// Delay between dispatch and reporting the attempt as submitted
    pub settle_delay: Duration,
    /// How long `success` is shown before reverting to `idle`
    pub success_display: Duration,
}

impl Default for RelayTimings {
    fn default() -> Self {
        Self {
            post_timeout: POST_TIMEOUT,
            fallback_grace: FALLBACK_GRACE,
            settle_delay: SETTLE_DELAY,
            success_display: SUCCESS_DISPLAY,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use contact_relay::Config;
///
/// let config = Config {
///     endpoint: "https://script.google.com/macros/s/XYZ/exec".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Apps Script web app URL receiving submissions
    pub endpoint: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Relay timers
    pub timings: RelayTimings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT_URL.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timings: RelayTimings::default(),
        }
    }
}

impl Config {
    /// Parses and validates the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the endpoint is empty, too long, not a valid
    /// URL, or uses a scheme other than http/https.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        parse_endpoint(&self.endpoint)
    }
}

/// Validates an endpoint string and parses it into a `Url`.
///
/// Surrounding whitespace is ignored (it commonly sneaks in through `.env` files).
pub fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::MissingEndpoint);
    }
    if raw.len() > MAX_ENDPOINT_URL_LENGTH {
        return Err(ConfigError::EndpointTooLong {
            len: raw.len(),
            max: MAX_ENDPOINT_URL_LENGTH,
        });
    }

    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
        url: raw.to_string(),
        source: e,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}
