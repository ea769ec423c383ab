//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `contact_relay` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use contact_relay::config::{Cli, Command};
use contact_relay::initialization::{init_logger_with, init_relay};
use contact_relay::{validate, ContactDraft, ContactForm, DeliveryPath, SubmitOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Load GOOGLE_SHEETS_URL from .env, current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match cli.command {
        Command::Check(args) => {
            let errors = validate(&ContactDraft::from(args));
            if errors.is_empty() {
                println!("✅ Submission is valid");
                return Ok(());
            }
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field, message);
            }
            process::exit(1);
        }
        Command::Submit(args) => {
            let config = args.config(cli.log_level, cli.log_format);
            let relay = init_relay(&config).context("Failed to initialize relay")?;
            let stats = Arc::clone(relay.stats());
            let form = ContactForm::new(relay);

            let outcome = form.submit_draft(args.draft.into()).await;
            let exit_code = match outcome {
                SubmitOutcome::Submitted(report) => {
                    match report.path {
                        DeliveryPath::Post { status, .. } => {
                            println!(
                                "✅ Submitted (POST {}) in {:.1}s",
                                status,
                                report.elapsed.as_secs_f64()
                            );
                        }
                        DeliveryPath::Fallback { reason } => {
                            println!(
                                "✅ Submitted via GET fallback ({:?}) in {:.1}s",
                                reason,
                                report.elapsed.as_secs_f64()
                            );
                            // Keep the runtime alive until the fallback transport is torn down
                            let timings = config.timings;
                            tokio::time::sleep(
                                timings.fallback_grace.saturating_sub(timings.settle_delay),
                            )
                            .await;
                        }
                    }
                    0
                }
                SubmitOutcome::Invalid(errors) => {
                    for (field, message) in errors.iter() {
                        eprintln!("{}: {}", field, message);
                    }
                    1
                }
                SubmitOutcome::Busy => {
                    eprintln!("contact_relay error: a submission is already in progress");
                    1
                }
                SubmitOutcome::Failed(e) => {
                    eprintln!("contact_relay error: {:#}", anyhow::Error::from(e));
                    1
                }
            };

            stats.log_summary();
            if exit_code != 0 {
                process::exit(exit_code);
            }
            Ok(())
        }
    }
}
