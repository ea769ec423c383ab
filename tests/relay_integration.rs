//! Integration tests for the relay against a mock Apps Script endpoint.
//!
//! These tests verify:
//! - The POST path and its URL-encoded body
//! - GET fallback on transport error and on POST timeout
//! - Late POST results being discarded
//! - Fallback transport teardown after the grace period
//! - Endpoint acks never changing the outcome

mod helpers;

use std::time::Duration;

use contact_relay::error_handling::{ErrorType, InfoType, WarningType};
use contact_relay::{DeliveryPath, FallbackReason, FormSubmission};
use helpers::*;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn submission() -> FormSubmission {
    FormSubmission::from_draft(jane_draft()).expect("jane is a valid draft")
}

#[tokio::test]
async fn test_post_success_does_not_fall_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(EXEC_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("investing=true"))
        .and(body_string_contains("partnership=false"))
        .and(body_string_contains("timestamp="))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"success":true,"message":"Form submitted successfully"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let relay = relay_for(&server, fast_timings());
    let report = relay.relay(&submission()).await.expect("relay should succeed");

    match report.path {
        DeliveryPath::Post { status, ack } => {
            assert_eq!(status.as_u16(), 200);
            assert!(ack.expect("JSON ack").is_positive());
        }
        other => panic!("expected POST delivery, got {:?}", other),
    }
    assert_eq!(relay.stats().get_info_count(InfoType::PostDelivered), 1);
    assert_eq!(relay.stats().get_info_count(InfoType::FallbackDispatched), 0);

    let gets = wait_for_requests(&server, "GET", 1, Duration::from_millis(200)).await;
    assert!(gets.is_empty(), "no fallback GET expected");
}

#[tokio::test]
async fn test_post_body_carries_every_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(EXEC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":"success"}"#))
        .mount(&server)
        .await;

    let relay = relay_for(&server, fast_timings());
    relay.relay(&submission()).await.expect("relay should succeed");

    let posts = wait_for_requests(&server, "POST", 1, Duration::from_secs(1)).await;
    assert_eq!(posts.len(), 1);
    let body = String::from_utf8(posts[0].body.clone()).expect("utf-8 body");
    for expected in [
        "name=Jane+Doe",
        "email=jane%40example.com",
        "phone=",
        "company=",
        "message=Hello",
        "investing=true",
        "partnership=false",
    ] {
        assert!(body.contains(expected), "missing {} in {}", expected, body);
    }
    assert!(body.starts_with("timestamp="), "timestamp should lead: {}", body);
}

#[tokio::test]
async fn test_transport_error_triggers_fallback_get() {
    let server = MockServer::start().await;
    mount_post_redirect_loop(&server).await;
    Mock::given(method("GET"))
        .and(path(EXEC_PATH))
        .and(query_param("name", "Jane Doe"))
        .and(query_param("email", "jane@example.com"))
        .and(query_param("investing", "true"))
        .and(query_param("partnership", "false"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let relay = relay_for(&server, fast_timings());
    let report = relay
        .relay(&submission())
        .await
        .expect("fallback dispatch does not fail");

    assert_eq!(
        report.path,
        DeliveryPath::Fallback {
            reason: FallbackReason::Transport(ErrorType::PostRedirectError)
        }
    );
    assert_eq!(relay.stats().get_error_count(ErrorType::PostRedirectError), 1);
    assert_eq!(relay.stats().get_info_count(InfoType::FallbackDispatched), 1);

    let gets = wait_for_requests(&server, "GET", 1, Duration::from_secs(1)).await;
    assert_eq!(gets.len(), 1, "exactly one fallback GET expected");
    let query = gets[0].url.query().unwrap_or_default().to_string();
    assert!(query.contains("timestamp="), "query was {}", query);
}

#[tokio::test]
async fn test_post_timeout_triggers_fallback_at_window() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(EXEC_PATH))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    mount_get_ok(&server).await;

    let mut timings = fast_timings();
    timings.post_timeout = Duration::from_millis(300);
    let relay = relay_for(&server, timings);
    let report = relay.relay(&submission()).await.expect("relay should succeed");

    assert_eq!(
        report.path,
        DeliveryPath::Fallback {
            reason: FallbackReason::Timeout
        }
    );
    assert!(
        report.elapsed >= timings.post_timeout + timings.settle_delay,
        "fallback fired too early: {:?}",
        report.elapsed
    );
    assert!(
        report.elapsed < Duration::from_secs(2),
        "supervisor waited on the slow POST: {:?}",
        report.elapsed
    );
    assert_eq!(relay.stats().get_error_count(ErrorType::PostWindowElapsed), 1);

    let gets = wait_for_requests(&server, "GET", 1, Duration::from_secs(1)).await;
    assert_eq!(gets.len(), 1);
}

#[tokio::test]
async fn test_late_post_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(EXEC_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"success":true}"#)
                .set_delay(Duration::from_millis(600)),
        )
        .mount(&server)
        .await;
    mount_get_ok(&server).await;

    let mut timings = fast_timings();
    timings.post_timeout = Duration::from_millis(200);
    let relay = relay_for(&server, timings);
    let report = relay.relay(&submission()).await.expect("relay should succeed");
    assert!(report.used_fallback());

    let stats = std::sync::Arc::clone(relay.stats());
    let discarded = wait_until(Duration::from_secs(2), || {
        stats.get_info_count(InfoType::LatePostDiscarded) == 1
    })
    .await;
    assert!(discarded, "the superseded POST should finish and be discarded");
    assert_eq!(stats.get_info_count(InfoType::PostDelivered), 0);
}

#[tokio::test]
async fn test_fallback_transport_torn_down_after_grace() {
    let server = MockServer::start().await;
    mount_post_redirect_loop(&server).await;
    Mock::given(method("GET"))
        .and(path(EXEC_PATH))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let mut timings = fast_timings();
    timings.fallback_grace = Duration::from_millis(200);
    let relay = relay_for(&server, timings);
    relay.relay(&submission()).await.expect("relay should succeed");

    let stats = std::sync::Arc::clone(relay.stats());
    let expired = wait_until(Duration::from_secs(2), || {
        stats.get_info_count(InfoType::FallbackExpired) == 1
    })
    .await;
    assert!(expired, "fallback GET should be torn down after the grace period");
    assert_eq!(stats.get_info_count(InfoType::FallbackCompleted), 0);
}

#[tokio::test]
async fn test_fallback_completion_is_recorded() {
    let server = MockServer::start().await;
    mount_post_redirect_loop(&server).await;
    mount_get_ok(&server).await;

    let relay = relay_for(&server, fast_timings());
    relay.relay(&submission()).await.expect("relay should succeed");

    let stats = std::sync::Arc::clone(relay.stats());
    let completed = wait_until(Duration::from_secs(2), || {
        stats.get_info_count(InfoType::FallbackCompleted) == 1
    })
    .await;
    assert!(completed);
}

#[tokio::test]
async fn test_negative_ack_still_reports_post_delivery() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(EXEC_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"success":false,"error":"Could not acquire lock"}"#),
        )
        .mount(&server)
        .await;

    let relay = relay_for(&server, fast_timings());
    let report = relay.relay(&submission()).await.expect("relay should succeed");

    assert!(!report.used_fallback());
    assert_eq!(relay.stats().get_warning_count(WarningType::NegativeAck), 1);
}

#[tokio::test]
async fn test_server_error_status_counts_as_completed_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(EXEC_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Error</html>"))
        .mount(&server)
        .await;

    let relay = relay_for(&server, fast_timings());
    let report = relay.relay(&submission()).await.expect("relay should succeed");

    match report.path {
        DeliveryPath::Post { status, ack } => {
            assert_eq!(status.as_u16(), 500);
            assert!(ack.is_none());
        }
        other => panic!("expected POST delivery, got {:?}", other),
    }
    assert_eq!(relay.stats().get_warning_count(WarningType::PostHttpStatus), 1);
    assert_eq!(relay.stats().get_warning_count(WarningType::UnreadableAck), 1);
    assert_eq!(relay.stats().get_info_count(InfoType::FallbackDispatched), 0);
}

#[tokio::test]
async fn test_settle_delay_is_honored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(EXEC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":true}"#))
        .mount(&server)
        .await;

    let mut timings = fast_timings();
    timings.settle_delay = Duration::from_millis(400);
    let relay = relay_for(&server, timings);
    let report = relay.relay(&submission()).await.expect("relay should succeed");

    assert!(
        report.elapsed >= Duration::from_millis(400),
        "reported before the settle delay: {:?}",
        report.elapsed
    );
}
