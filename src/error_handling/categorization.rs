//! Error categorization.

use super::stats::RelayStats;
use super::types::ErrorType;

/// Categorizes a POST `reqwest::Error` into an `ErrorType`.
///
/// `send()` never produces status errors (any HTTP response counts as a
/// completed POST), so only transport-level kinds are distinguished here.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::PostBuilderError
    } else if error.is_redirect() {
        ErrorType::PostRedirectError
    } else if error.is_timeout() {
        ErrorType::PostTimeoutError
    } else if error.is_connect() {
        ErrorType::PostConnectError
    } else if error.is_request() {
        ErrorType::PostRequestError
    } else if error.is_body() {
        ErrorType::PostBodyError
    } else {
        ErrorType::PostOtherError
    }
}

/// Records a POST transport error and returns the category it was filed under.
pub fn update_error_stats(stats: &RelayStats, error: &reqwest::Error) -> ErrorType {
    let error_type = categorize_reqwest_error(error);
    stats.increment_error(error_type);
    error_type
}
