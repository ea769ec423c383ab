// Shared test helpers for relay and form tests.
//
// Wiremock stands in for the Apps Script endpoint; timings are shortened so
// the suites run in seconds.

use std::time::{Duration, Instant};

use contact_relay::{init_relay, Config, ContactDraft, Relay, RelayTimings};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const EXEC_PATH: &str = "/exec";

/// Shortened timers: 1s POST window, 500ms grace, 50ms settle, 300ms display.
pub fn fast_timings() -> RelayTimings {
    RelayTimings {
        post_timeout: Duration::from_secs(1),
        fallback_grace: Duration::from_millis(500),
        settle_delay: Duration::from_millis(50),
        success_display: Duration::from_millis(300),
    }
}

/// The draft used throughout the suites.
pub fn jane_draft() -> ContactDraft {
    ContactDraft {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        phone: String::new(),
        company: String::new(),
        message: "Hello".into(),
        investing: true,
        partnership: false,
    }
}

/// Builds a relay pointed at the mock server's `/exec`.
pub fn relay_for(server: &MockServer, timings: RelayTimings) -> Relay {
    let config = Config {
        endpoint: format!("{}{}", server.uri(), EXEC_PATH),
        timings,
        ..Default::default()
    };
    init_relay(&config).expect("Failed to build relay for mock server")
}

/// Answers every POST to `/exec` with a 307 back to itself, so the POST
/// dies with a redirect-loop transport error.
#[allow(dead_code)] // Used by other test files
pub async fn mount_post_redirect_loop(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(EXEC_PATH))
        .respond_with(
            ResponseTemplate::new(307)
                .insert_header("Location", format!("{}{}", server.uri(), EXEC_PATH).as_str()),
        )
        .mount(server)
        .await;
}

/// Answers every GET to `/exec` the way the Apps Script doGet does.
#[allow(dead_code)] // Used by other test files
pub async fn mount_get_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(EXEC_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<script>window.parent.postMessage('success', '*')</script>"),
        )
        .mount(server)
        .await;
}

/// Polls the mock server until `count` requests with `verb` arrived or
/// `within` elapses, returning whatever matched.
#[allow(dead_code)] // Used by other test files
pub async fn wait_for_requests(
    server: &MockServer,
    verb: &str,
    count: usize,
    within: Duration,
) -> Vec<Request> {
    let deadline = Instant::now() + within;
    loop {
        let matching: Vec<Request> = server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == verb)
            .collect();
        if matching.len() >= count || Instant::now() >= deadline {
            return matching;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

/// Polls `probe` until it returns `true` or `within` elapses.
#[allow(dead_code)] // Used by other test files
pub async fn wait_until(within: Duration, probe: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + within;
    while Instant::now() < deadline {
        if probe() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    probe()
}
