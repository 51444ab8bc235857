//! Integration tests for `WebhookNotifier` using wiremock HTTP mocks.

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pickwatch_notify::{Notify, NotifierConfig, NotifyError, WebhookNotifier};

/// Builds a notifier pointed at the mock server. Zero back-off so retry
/// tests do not sleep.
fn test_notifier(url: &str, max_retries: u32) -> WebhookNotifier {
    WebhookNotifier::new(&NotifierConfig {
        url: url.to_owned(),
        timeout_secs: 5,
        max_retries,
        backoff_base_ms: 0,
    })
    .expect("failed to build test WebhookNotifier")
}

#[tokio::test]
async fn publish_posts_message_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(serde_json::json!({"message": "SoHo has AirPods Pro"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = test_notifier(&server.uri(), 0);
    let result = notifier.publish("SoHo has AirPods Pro").await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn publish_retries_after_server_error_and_succeeds() {
    let server = MockServer::start().await;

    // First request returns 503 (served once), second succeeds.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let notifier = test_notifier(&server.uri(), 1);
    let result = notifier.publish("retry me").await;

    assert!(result.is_ok(), "expected Ok after retry, got: {result:?}");
}

#[tokio::test]
async fn publish_does_not_retry_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1) // a 4xx must not be retried
        .mount(&server)
        .await;

    let notifier = test_notifier(&server.uri(), 3);
    let result = notifier.publish("bad receiver").await;

    match result.unwrap_err() {
        NotifyError::UnexpectedStatus { status } => assert_eq!(status, 404),
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn publish_returns_error_after_exhausting_retries() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3) // 1 initial + 2 retries
        .mount(&server)
        .await;

    let notifier = test_notifier(&server.uri(), 2);
    let result = notifier.publish("always failing").await;

    assert!(
        matches!(result, Err(NotifyError::UnexpectedStatus { status: 500 })),
        "expected UnexpectedStatus(500) after retry exhaustion, got: {result:?}"
    );
}

#[test]
fn new_rejects_invalid_url() {
    let result = WebhookNotifier::new(&NotifierConfig {
        url: "not-a-url".to_owned(),
        timeout_secs: 5,
        max_retries: 0,
        backoff_base_ms: 0,
    });
    assert!(
        matches!(result, Err(NotifyError::InvalidUrl { .. })),
        "expected InvalidUrl"
    );
}
