//! Secondary delivery path: fire-and-forget GET.

use std::sync::Arc;
use std::time::Duration;

use crate::error_handling::{ErrorType, InfoType, RelayStats};

/// Sends the query-string GET and forgets about it.
///
/// The response is drained but never inspected. Whatever state the request
/// is in when `grace` runs out, the transport is dropped, which may truncate
/// a slow delivery.
pub async fn fallback_attempt(
    client: reqwest::Client,
    request: reqwest::Request,
    grace: Duration,
    stats: Arc<RelayStats>,
) {
    let delivery = async {
        let response = client.execute(request).await?;
        response.bytes().await.map(|_| ())
    };

    match tokio::time::timeout(grace, delivery).await {
        Ok(Ok(())) => {
            log::debug!("Fallback GET finished");
            stats.increment_info(InfoType::FallbackCompleted);
        }
        Ok(Err(e)) => {
            log::debug!("Fallback GET failed: {}", e);
            stats.increment_error(ErrorType::FallbackRequestError);
        }
        Err(_) => {
            log::debug!("Fallback GET torn down after {:?}", grace);
            stats.increment_info(InfoType::FallbackExpired);
        }
    }
}
