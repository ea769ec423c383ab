//! Endpoint acknowledgement parsing.

use serde::Deserialize;
use serde_json::Value;

/// JSON body an Apps Script endpoint answers a POST with.
///
/// Deployed scripts disagree on the shape: some send `{"success": true}`,
/// others `{"result": "success"}`. Both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoteAck {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RemoteAck {
    /// Parses a response body, returning `None` unless it is a JSON object.
    pub fn parse(body: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(body.trim()).ok()? {
            object @ Value::Object(_) => serde_json::from_value(object).ok(),
            _ => None,
        }
    }

    /// The endpoint says the row was written.
    pub fn is_positive(&self) -> bool {
        if let Some(success) = self.success {
            return success;
        }
        match &self.result {
            Some(Value::Bool(ok)) => *ok,
            Some(Value::String(r)) => r.eq_ignore_ascii_case("success"),
            _ => false,
        }
    }

    /// The endpoint says the write failed.
    pub fn is_negative(&self) -> bool {
        if let Some(success) = self.success {
            return !success;
        }
        match &self.result {
            Some(Value::Bool(false)) => true,
            Some(Value::String(r)) => r.eq_ignore_ascii_case("error"),
            _ => self.error.is_some(),
        }
    }
}
