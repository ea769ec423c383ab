//! Error type definitions.
//!
//! This module defines all error, warning, and info types used by the relay.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configuration could not be turned into a working relay.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Error types for configuration problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No endpoint URL was configured.
    #[error("Endpoint URL is empty")]
    MissingEndpoint,

    /// The endpoint URL exceeds the accepted length.
    #[error("Endpoint URL is too long ({len} > {max} characters)")]
    EndpointTooLong { len: usize, max: usize },

    /// The endpoint URL could not be parsed.
    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The endpoint URL uses a scheme other than http/https.
    #[error("Unsupported endpoint scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
}

/// Unrecoverable relay failures.
///
/// Raised only when the fallback dispatch itself fails, i.e. neither path
/// could be launched. Transport errors and timeouts on the POST are recovered
/// by the fallback and never surface here.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The fallback GET cannot target this endpoint.
    #[error("Fallback dispatch impossible: unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    /// The fallback GET request could not be built.
    #[error("Fallback dispatch impossible: {0}")]
    FallbackRequest(#[source] ReqwestError),
}

/// Types of errors observed while relaying a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // POST transport errors (recovered by the fallback)
    PostBuilderError,
    PostRedirectError,
    PostTimeoutError,
    PostRequestError,
    PostConnectError,
    PostBodyError,
    PostOtherError,
    /// The POST window elapsed before a response arrived
    PostWindowElapsed,
    /// The POST task panicked
    PostPanicked,
    // Fallback errors
    /// The background GET failed (logged only, never surfaced)
    FallbackRequestError,
    /// Neither path could be dispatched
    Unrecoverable,
}

/// Types of warnings observed while relaying a submission.
///
/// Warnings never change the outcome reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// The POST completed with a non-2xx status
    PostHttpStatus,
    /// The endpoint answered with `success: false`
    NegativeAck,
    /// The POST body was not a recognizable ack
    UnreadableAck,
}

/// Types of informational metrics recorded by the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// POST completed within the window
    PostDelivered,
    /// GET fallback launched
    FallbackDispatched,
    /// GET fallback received a response within the grace period
    FallbackCompleted,
    /// GET fallback transport torn down at the end of the grace period
    FallbackExpired,
    /// A superseded POST finished after the fallback fired
    LatePostDiscarded,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::PostBuilderError => "POST builder error",
            ErrorType::PostRedirectError => "POST redirect error",
            ErrorType::PostTimeoutError => "POST timeout error",
            ErrorType::PostRequestError => "POST request error",
            ErrorType::PostConnectError => "POST connect error",
            ErrorType::PostBodyError => "POST body error",
            ErrorType::PostOtherError => "POST other error",
            ErrorType::PostWindowElapsed => "POST window elapsed",
            ErrorType::PostPanicked => "POST task panicked",
            ErrorType::FallbackRequestError => "Fallback GET error",
            ErrorType::Unrecoverable => "Unrecoverable dispatch error",
        }
    }
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WarningType::PostHttpStatus => "POST non-success status",
            WarningType::NegativeAck => "Endpoint reported failure",
            WarningType::UnreadableAck => "Unreadable endpoint response",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InfoType::PostDelivered => "POST delivered",
            InfoType::FallbackDispatched => "Fallback dispatched",
            InfoType::FallbackCompleted => "Fallback completed",
            InfoType::FallbackExpired => "Fallback expired",
            InfoType::LatePostDiscarded => "Late POST discarded",
        };
        f.write_str(s)
    }
}
