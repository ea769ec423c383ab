//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (relay timings, endpoint defaults, client limits)
//! - Library configuration types
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

pub use cli::{Cli, Command, DraftArgs, SubmitArgs};
pub use constants::*;
pub use types::{parse_endpoint, Config, LogFormat, LogLevel, RelayTimings};
