//! Command-line options.
//!
//! Thin clap layer over [`Config`] and [`ContactDraft`]; the library itself
//! never depends on these types.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{DEFAULT_ENDPOINT_URL, DEFAULT_USER_AGENT, ENDPOINT_ENV_VAR};
use crate::config::types::{Config, LogFormat, LogLevel, RelayTimings};
use crate::submission::ContactDraft;

/// Relays contact form submissions to a Google Sheet.
///
/// # Examples
///
/// ```bash
/// # Validate and send a submission
/// contact_relay submit --name "Jane Doe" --email jane@example.com --message "Hello" --investing
///
/// # Validate only, no network
/// contact_relay check --name "" --email bad --message ""
///
/// # Point at a different web app
/// GOOGLE_SHEETS_URL=https://script.google.com/macros/s/XYZ/exec contact_relay submit ...
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "contact_relay",
    version,
    about = "Validates contact form submissions and relays them to a Google Apps Script endpoint."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the fields and relay them to the endpoint
    Submit(SubmitArgs),
    /// Validate the fields without sending anything
    Check(DraftArgs),
}

/// Contact form fields.
#[derive(Debug, Clone, Args)]
pub struct DraftArgs {
    /// Sender name (required)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Sender email (required)
    #[arg(long, default_value = "")]
    pub email: String,

    /// Phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Company name
    #[arg(long, default_value = "")]
    pub company: String,

    /// Message body (required)
    #[arg(long, default_value = "")]
    pub message: String,

    /// Interested in investing
    #[arg(long)]
    pub investing: bool,

    /// Interested in a partnership
    #[arg(long)]
    pub partnership: bool,
}

impl From<DraftArgs> for ContactDraft {
    fn from(args: DraftArgs) -> Self {
        ContactDraft {
            name: args.name,
            email: args.email,
            phone: args.phone,
            company: args.company,
            message: args.message,
            investing: args.investing,
            partnership: args.partnership,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub draft: DraftArgs,

    /// Apps Script web app URL
    #[arg(long, env = ENDPOINT_ENV_VAR, default_value = DEFAULT_ENDPOINT_URL)]
    pub endpoint: String,

    /// Seconds to wait on the POST before falling back to GET
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl SubmitArgs {
    /// Builds the library configuration from the parsed flags.
    pub fn config(&self, log_level: LogLevel, log_format: LogFormat) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            log_level,
            log_format,
            user_agent: self.user_agent.clone(),
            timings: RelayTimings {
                post_timeout: Duration::from_secs(self.timeout_seconds),
                ..RelayTimings::default()
            },
        }
    }
}
