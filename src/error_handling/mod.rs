//! Error handling and relay statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, relay)
//! - Categorization of POST transport errors
//! - Relay statistics tracking (errors, warnings, info metrics)
//!
//! Statistic types are categorized into:
//! - **Errors**: transport failures, recovered by the fallback unless `Unrecoverable`
//! - **Warnings**: odd endpoint responses that do not change the outcome
//! - **Info**: which path fired and how the detached tasks ended

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, update_error_stats};
pub use stats::RelayStats;
pub use types::{ConfigError, ErrorType, InfoType, InitializationError, RelayError, WarningType};
