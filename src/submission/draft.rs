use serde::{Deserialize, Serialize};

/// Raw contact form state as typed by the user.
///
/// Nothing here is validated; see [`validate`](super::validate) and
/// [`FormSubmission::from_draft`](super::FormSubmission::from_draft).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub investing: bool,
    pub partnership: bool,
}
