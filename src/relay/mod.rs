//! Submission relay.
//!
//! Delivers a validated [`FormSubmission`] to the Apps Script endpoint:
//!
//! 1. `post_attempt` POSTs the URL-encoded body in its own task.
//! 2. If the POST fails at the transport level, panics, or is still running
//!    when the POST window closes, `fallback_attempt` GETs the same fields as
//!    a query string, fire-and-forget, torn down after the grace period.
//! 3. Either way, the supervisor waits the settle delay and reports the
//!    attempt as submitted.
//!
//! A POST superseded by the window is not cancelled. If it finishes later,
//! its result is logged and discarded. Nothing here confirms that the remote
//! sheet was written: `Ok` means "delivery was attempted".

mod ack;
mod fallback;
mod post;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use reqwest::StatusCode;
use tokio::task::JoinHandle;
use url::Url;

use crate::config::RelayTimings;
use crate::error_handling::{
    update_error_stats, ErrorType, InfoType, RelayError, RelayStats, WarningType,
};
use crate::submission::FormSubmission;

pub use ack::RemoteAck;
pub use fallback::fallback_attempt;
pub use post::{post_attempt, PostDelivery};

/// Why the GET fallback was launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The POST failed at the transport level
    Transport(ErrorType),
    /// The POST window elapsed with the request still running
    Timeout,
    /// The POST task panicked
    Panicked,
}

/// Which path carried the submission.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryPath {
    /// The POST completed within the window.
    Post {
        status: StatusCode,
        ack: Option<RemoteAck>,
    },
    /// The GET fallback was dispatched. Its outcome is unknown by design.
    Fallback { reason: FallbackReason },
}

/// Outcome of a relay attempt that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReport {
    pub path: DeliveryPath,
    /// Time from dispatch to report, settle delay included
    pub elapsed: Duration,
}

impl DispatchReport {
    pub fn used_fallback(&self) -> bool {
        matches!(self.path, DeliveryPath::Fallback { .. })
    }
}

type PostHandle = JoinHandle<Result<PostDelivery, reqwest::Error>>;

/// Dual-path dispatcher for contact form submissions.
#[derive(Debug, Clone)]
pub struct Relay {
    client: reqwest::Client,
    endpoint: Url,
    timings: RelayTimings,
    stats: Arc<RelayStats>,
}

impl Relay {
    /// Creates a relay targeting `endpoint` with fresh statistics.
    pub fn new(client: reqwest::Client, endpoint: Url, timings: RelayTimings) -> Self {
        Self {
            client,
            endpoint,
            timings,
            stats: Arc::new(RelayStats::new()),
        }
    }

    /// Records into a shared statistics instance instead.
    pub fn with_stats(mut self, stats: Arc<RelayStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timings(&self) -> RelayTimings {
        self.timings
    }

    pub fn stats(&self) -> &Arc<RelayStats> {
        &self.stats
    }

    /// Delivers `submission`, falling back to GET when the POST misbehaves.
    ///
    /// Resolves after at most the POST window plus the settle delay.
    ///
    /// # Errors
    ///
    /// Returns a `RelayError` only when the fallback itself cannot be
    /// dispatched. POST failures and timeouts are recovered.
    pub async fn relay(&self, submission: &FormSubmission) -> Result<DispatchReport, RelayError> {
        self.relay_with(submission, post_attempt).await
    }

    /// [`relay`](Self::relay) with the POST step supplied by the caller.
    pub(crate) async fn relay_with<F, Fut>(
        &self,
        submission: &FormSubmission,
        post_step: F,
    ) -> Result<DispatchReport, RelayError>
    where
        F: FnOnce(reqwest::Client, Url, String) -> Fut,
        Fut: Future<Output = Result<PostDelivery, reqwest::Error>> + Send + 'static,
    {
        let started = Instant::now();
        info!("Submitting form to: {}", self.endpoint);

        let body = submission.form_body();
        debug!("Form body: {}", body);

        let mut post: PostHandle =
            tokio::spawn(post_step(self.client.clone(), self.endpoint.clone(), body));

        let outcome = tokio::time::timeout(self.timings.post_timeout, &mut post).await;
        let path = match outcome {
            Ok(Ok(Ok(delivery))) => self.record_delivery(delivery),
            Ok(Ok(Err(e))) => {
                let category = update_error_stats(&self.stats, &e);
                warn!("POST failed ({}: {}), trying GET fallback...", category, e);
                self.dispatch_fallback(submission, FallbackReason::Transport(category))?
            }
            Ok(Err(join_err)) => {
                self.stats.increment_error(ErrorType::PostPanicked);
                warn!("POST task aborted ({}), trying GET fallback...", join_err);
                self.dispatch_fallback(submission, FallbackReason::Panicked)?
            }
            Err(_) => {
                self.stats.increment_error(ErrorType::PostWindowElapsed);
                warn!(
                    "POST timeout after {:?}, trying GET fallback...",
                    self.timings.post_timeout
                );
                tokio::spawn(discard_late_post(post, Arc::clone(&self.stats)));
                self.dispatch_fallback(submission, FallbackReason::Timeout)?
            }
        };

        tokio::time::sleep(self.timings.settle_delay).await;

        Ok(DispatchReport {
            path,
            elapsed: started.elapsed(),
        })
    }

    fn record_delivery(&self, delivery: PostDelivery) -> DeliveryPath {
        self.stats.increment_info(InfoType::PostDelivered);
        info!("POST response: {}", delivery.status);

        if !delivery.status.is_success() {
            self.stats.increment_warning(WarningType::PostHttpStatus);
            warn!("Endpoint answered POST with {}", delivery.status);
        }
        match &delivery.ack {
            Some(ack) if ack.is_negative() => {
                self.stats.increment_warning(WarningType::NegativeAck);
                warn!(
                    "Endpoint reported failure: {}",
                    ack.error.as_deref().unwrap_or("no details")
                );
            }
            Some(_) => {}
            None => {
                self.stats.increment_warning(WarningType::UnreadableAck);
                debug!("Endpoint response was not a JSON ack");
            }
        }

        DeliveryPath::Post {
            status: delivery.status,
            ack: delivery.ack,
        }
    }

    /// Launches the GET fallback without waiting for it.
    fn dispatch_fallback(
        &self,
        submission: &FormSubmission,
        reason: FallbackReason,
    ) -> Result<DeliveryPath, RelayError> {
        let url = submission.query_url(&self.endpoint);
        if !matches!(url.scheme(), "http" | "https") {
            self.stats.increment_error(ErrorType::Unrecoverable);
            return Err(RelayError::UnsupportedScheme(url.scheme().to_string()));
        }

        let request = self.client.get(url).build().map_err(|e| {
            self.stats.increment_error(ErrorType::Unrecoverable);
            RelayError::FallbackRequest(e)
        })?;

        tokio::spawn(fallback_attempt(
            self.client.clone(),
            request,
            self.timings.fallback_grace,
            Arc::clone(&self.stats),
        ));
        self.stats.increment_info(InfoType::FallbackDispatched);

        Ok(DeliveryPath::Fallback { reason })
    }
}

/// Awaits a POST the supervisor stopped waiting on and throws its result away.
async fn discard_late_post(post: PostHandle, stats: Arc<RelayStats>) {
    match post.await {
        Ok(Ok(delivery)) => {
            stats.increment_info(InfoType::LatePostDiscarded);
            debug!("Late POST response discarded: {}", delivery.status);
        }
        Ok(Err(e)) => debug!("Late POST failed: {}", e),
        Err(e) => debug!("Late POST task aborted: {}", e),
    }
}
