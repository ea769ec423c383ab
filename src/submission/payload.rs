//! Validated submissions and their wire encodings.

use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;
use url::Url;

use super::validate::{validate, FieldErrors};
use super::ContactDraft;

/// Transport keys, in the order the endpoint's sheet columns expect them.
pub const FIELD_KEYS: [&str; 8] = [
    "timestamp",
    "name",
    "email",
    "phone",
    "company",
    "message",
    "investing",
    "partnership",
];

/// A draft that passed validation, stamped with its submission time.
///
/// Only obtainable through [`FormSubmission::from_draft`], so an invalid
/// draft can never reach the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    draft: ContactDraft,
    timestamp: DateTime<Utc>,
}

impl FormSubmission {
    /// Validates `draft` and stamps it with the current time.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors if any required field fails.
    pub fn from_draft(draft: ContactDraft) -> Result<Self, FieldErrors> {
        Self::from_draft_at(draft, Utc::now())
    }

    /// Like [`from_draft`](Self::from_draft) with an explicit timestamp.
    pub fn from_draft_at(
        draft: ContactDraft,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, FieldErrors> {
        let errors = validate(&draft);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self { draft, timestamp })
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Flattens the submission into string pairs, in [`FIELD_KEYS`] order.
    ///
    /// The timestamp is ISO 8601 with millisecond precision and a `Z` suffix;
    /// booleans become the literal strings `"true"` / `"false"`.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let d = &self.draft;
        let values = [
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            d.name.clone(),
            d.email.clone(),
            d.phone.clone(),
            d.company.clone(),
            d.message.clone(),
            d.investing.to_string(),
            d.partnership.to_string(),
        ];
        FIELD_KEYS.into_iter().zip(values).collect()
    }

    /// `application/x-www-form-urlencoded` body for the POST path.
    pub fn form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields())
            .finish()
    }

    /// `endpoint` with the fields appended as a query string, for the GET path.
    ///
    /// Query pairs already present on the endpoint are kept in front.
    pub fn query_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        url.query_pairs_mut().extend_pairs(self.fields());
        url
    }
}
