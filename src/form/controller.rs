//! Contact form controller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::watch;

use super::state::{FormState, SubmitStatus};
use crate::error_handling::RelayError;
use crate::relay::{DispatchReport, Relay};
use crate::submission::{ContactDraft, FieldErrors, FormSubmission};

/// Result of [`ContactForm::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// Another submission is still in flight; nothing was sent.
    Busy,
    /// Delivery was attempted.
    Submitted(DispatchReport),
    /// Neither path could be dispatched.
    Failed(RelayError),
}

/// Drives a [`FormState`] through validation, relay and auto-reset.
///
/// Every state change is published on a `watch` channel; UIs subscribe with
/// [`ContactForm::subscribe`].
pub struct ContactForm {
    relay: Arc<Relay>,
    state: Arc<watch::Sender<FormState>>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when a submission ends, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ContactForm {
    pub fn new(relay: Relay) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self {
            relay: Arc::new(relay),
            state: Arc::new(state),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn relay(&self) -> &Relay {
        &self.relay
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Applies a user edit to the draft.
    pub fn edit(&self, f: impl FnOnce(&mut ContactDraft)) {
        self.state.send_modify(|s| *s = std::mem::take(s).edit(f));
    }

    /// Replaces the draft and submits it.
    ///
    /// A `Busy` result leaves the form untouched, including the draft of the
    /// submission in flight.
    pub async fn submit_draft(&self, draft: ContactDraft) -> SubmitOutcome {
        self.submit_inner(Some(draft)).await
    }

    /// Validates the current draft and, if it passes, relays it.
    ///
    /// On success the form is cleared and the status reverts to `Idle` after
    /// the success display window. On failure the status stays `Error` until
    /// the next attempt.
    pub async fn submit(&self) -> SubmitOutcome {
        self.submit_inner(None).await
    }

    async fn submit_inner(&self, replacement: Option<ContactDraft>) -> SubmitOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            warn!("Submission already in progress, ignoring");
            return SubmitOutcome::Busy;
        }
        let _guard = InFlight(&self.in_flight);

        let mut draft = ContactDraft::default();
        let mut errors = FieldErrors::default();
        self.state.send_modify(|s| {
            let mut next = std::mem::take(s);
            if let Some(replacement) = replacement {
                next.draft = replacement;
            }
            *s = next.validate();
            draft = s.draft.clone();
            errors = s.errors.clone();
        });
        if !errors.is_empty() {
            warn!("Form validation failed: {}", errors);
            return SubmitOutcome::Invalid(errors);
        }

        let submission = match FormSubmission::from_draft(draft) {
            Ok(submission) => submission,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        let mut attempt = 0;
        self.state.send_modify(|s| {
            *s = std::mem::take(s).begin_submit();
            attempt = s.attempt;
        });

        match self.relay.relay(&submission).await {
            Ok(report) => {
                info!("Submission {} sent", attempt);
                self.state
                    .send_modify(|s| *s = std::mem::take(s).resolve_success());
                self.schedule_reset(attempt);
                SubmitOutcome::Submitted(report)
            }
            Err(e) => {
                error!("Error submitting form: {}", e);
                self.state
                    .send_modify(|s| *s = std::mem::take(s).resolve_error());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Reverts `Success` to `Idle` once the display window passes, unless a
    /// newer attempt has started in the meantime.
    fn schedule_reset(&self, attempt: u64) {
        let state = Arc::clone(&self.state);
        let display = self.relay.timings().success_display;
        tokio::spawn(async move {
            tokio::time::sleep(display).await;
            state.send_if_modified(|s| {
                if s.status == SubmitStatus::Success && s.attempt == attempt {
                    *s = std::mem::take(s).reset();
                    true
                } else {
                    false
                }
            });
        });
    }
}
