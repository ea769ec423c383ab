//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON)
//! - HTTP client
//! - The relay itself, built from a [`Config`]

mod client;
mod logger;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::relay::Relay;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Builds a [`Relay`] from configuration.
///
/// Validates the endpoint and creates the HTTP client.
///
/// # Errors
///
/// Returns `InitializationError::ConfigError` for an invalid endpoint and
/// `InitializationError::HttpClientError` if the client cannot be built.
pub fn init_relay(config: &Config) -> Result<Relay, InitializationError> {
    let endpoint = config.endpoint_url()?;
    let client = init_client(config)?;
    Ok(Relay::new(client, endpoint, config.timings))
}
