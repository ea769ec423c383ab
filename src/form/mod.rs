//! Contact form state machine.
//!
//! `idle → submitting → (success | error) → idle`, with `success` reverting
//! to `idle` on a timer and `error` persisting until the next attempt.

mod controller;
mod state;

pub use controller::{ContactForm, SubmitOutcome};
pub use state::{FormState, SubmitStatus};
