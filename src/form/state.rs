//! Contact form state and its transitions.

use crate::submission::{validate, ContactDraft, FieldErrors};

/// Where the current submission attempt stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Snapshot of the contact form.
///
/// Transitions consume the state and return the next one, so every published
/// value is a complete, consistent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: ContactDraft,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
    /// Increments on every `begin_submit`
    pub attempt: u64,
}

impl FormState {
    pub fn new(draft: ContactDraft) -> Self {
        Self {
            draft,
            ..Default::default()
        }
    }

    /// Applies a user edit to the draft.
    pub fn edit(mut self, f: impl FnOnce(&mut ContactDraft)) -> Self {
        f(&mut self.draft);
        self
    }

    /// Runs the field rules and records their errors. Status is untouched.
    pub fn validate(mut self) -> Self {
        self.errors = validate(&self.draft);
        self
    }

    pub fn begin_submit(mut self) -> Self {
        self.errors = FieldErrors::default();
        self.status = SubmitStatus::Submitting;
        self.attempt += 1;
        self
    }

    /// Marks the attempt successful and clears the form.
    pub fn resolve_success(mut self) -> Self {
        self.status = SubmitStatus::Success;
        self.draft = ContactDraft::default();
        self
    }

    /// Marks the attempt failed. The draft is kept so the user can retry.
    pub fn resolve_error(mut self) -> Self {
        self.status = SubmitStatus::Error;
        self
    }

    pub fn reset(mut self) -> Self {
        self.status = SubmitStatus::Idle;
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }
}
