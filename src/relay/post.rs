//! Primary delivery path: URL-encoded POST.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use url::Url;

use super::ack::RemoteAck;
use crate::config::MAX_ACK_BODY_SIZE;

/// What came back from a POST that completed.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDelivery {
    pub status: StatusCode,
    /// Parsed endpoint response, if the body was a JSON object
    pub ack: Option<RemoteAck>,
}

/// Sends the form body to the endpoint and reads its answer.
///
/// Any HTTP response counts as completion, whatever its status; only
/// transport-level failures (connect, redirect loop, broken body) are errors.
/// The body is truncated to `MAX_ACK_BODY_SIZE` before ack parsing.
///
/// Runs as its own task so that the supervisor can stop waiting on it without
/// cancelling it.
pub async fn post_attempt(
    client: reqwest::Client,
    endpoint: Url,
    body: String,
) -> Result<PostDelivery, reqwest::Error> {
    let response = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let bytes = response.bytes().await?;
    let text = String::from_utf8_lossy(&bytes[..bytes.len().min(MAX_ACK_BODY_SIZE)]);
    log::debug!("POST response: {} {}", status, text);

    Ok(PostDelivery {
        status,
        ack: RemoteAck::parse(&text),
    })
}
