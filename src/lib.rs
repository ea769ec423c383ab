//! contact_relay library: contact form validation and best-effort delivery
//!
//! This library validates contact form drafts and relays them to a Google Apps
//! Script web app that appends each submission to a spreadsheet. The endpoint
//! is unreliable, so delivery is a POST with a fire-and-forget GET fallback,
//! bounded by fixed timers so the caller is never left waiting.
//!
//! # Example
//!
//! ```no_run
//! use contact_relay::{init_relay, Config, ContactDraft, ContactForm, SubmitOutcome};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let relay = init_relay(&Config::default())?;
//! let form = ContactForm::new(relay);
//!
//! let outcome = form
//!     .submit_draft(ContactDraft {
//!         name: "Jane Doe".into(),
//!         email: "jane@example.com".into(),
//!         message: "Hello".into(),
//!         investing: true,
//!         ..Default::default()
//!     })
//!     .await;
//!
//! match outcome {
//!     SubmitOutcome::Submitted(report) => println!("sent via {:?}", report.path),
//!     SubmitOutcome::Invalid(errors) => println!("fix these: {}", errors),
//!     other => println!("not sent: {:?}", other),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. The relay spawns its POST and
//! fallback GET as background tasks.

pub mod config;
pub mod error_handling;
pub mod form;
pub mod initialization;
pub mod relay;
pub mod submission;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, RelayTimings};
pub use error_handling::{ConfigError, InitializationError, RelayError, RelayStats};
pub use form::{ContactForm, FormState, SubmitOutcome, SubmitStatus};
pub use initialization::init_relay;
pub use relay::{DeliveryPath, DispatchReport, FallbackReason, Relay, RemoteAck};
pub use submission::{validate, ContactDraft, Field, FieldErrors, FormSubmission};
