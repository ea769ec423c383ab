//! Contact form submissions.
//!
//! This module provides:
//! - [`ContactDraft`]: raw, unvalidated form state
//! - [`validate`]: the required-field rules
//! - [`FormSubmission`]: a validated draft with its POST body and GET query encodings

mod draft;
mod payload;
mod validate;

pub use draft::ContactDraft;
pub use payload::{FormSubmission, FIELD_KEYS};
pub use validate::{is_valid_email, validate, Field, FieldErrors};
