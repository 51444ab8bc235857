use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use super::*;
use pickwatch_notify::NotifyError;

// ---------------------------------------------------------------------------
// Test collaborators
// ---------------------------------------------------------------------------

/// Fetch fake that replays a fixed script of cycle results.
struct ScriptedFetch {
    responses: Mutex<VecDeque<Result<Vec<StoreAvailability>, ClientError>>>,
}

impl ScriptedFetch {
    fn new(responses: Vec<Result<Vec<StoreAvailability>, ClientError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

impl Fetch for ScriptedFetch {
    async fn fetch(&self) -> Result<Vec<StoreAvailability>, ClientError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("fetch called more times than scripted")
    }
}

/// Notifier fake that records every message; optionally fails each publish.
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl Notify for RecordingNotifier {
    async fn publish(&self, message: &str) -> Result<(), NotifyError> {
        self.messages.lock().unwrap().push(message.to_owned());
        if self.fail {
            Err(NotifyError::UnexpectedStatus { status: 500 })
        } else {
            Ok(())
        }
    }
}

/// Wait fake: no sleeping, just counts how often the loop slept.
struct CountingWait {
    calls: Arc<AtomicU32>,
}

impl Wait for CountingWait {
    async fn wait(&mut self, _secs: u64) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn target() -> PollTarget {
    PollTarget::new("MWP22", "10001", 5).expect("valid target")
}

fn store(name: &str, available: bool) -> StoreAvailability {
    StoreAvailability {
        store_name: name.to_owned(),
        product_title: "AirPods Pro".to_owned(),
        available,
    }
}

fn transient_error() -> ClientError {
    let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    ClientError::Deserialize {
        context: "test".to_owned(),
        source,
    }
}

fn fatal_error() -> ClientError {
    ClientError::RejectedInput("Invalid zip code or city/state.".to_owned())
}

type TestPoller = Poller<ScriptedFetch, RecordingNotifier, CountingWait>;

fn poller(
    responses: Vec<Result<Vec<StoreAvailability>, ClientError>>,
) -> (TestPoller, Arc<Mutex<Vec<String>>>, Arc<AtomicU32>) {
    poller_with_failing_notifier(responses, false)
}

fn poller_with_failing_notifier(
    responses: Vec<Result<Vec<StoreAvailability>, ClientError>>,
    fail: bool,
) -> (TestPoller, Arc<Mutex<Vec<String>>>, Arc<AtomicU32>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let waits = Arc::new(AtomicU32::new(0));
    let poller = Poller::new(
        target(),
        ScriptedFetch::new(responses),
        RecordingNotifier {
            messages: Arc::clone(&messages),
            fail,
        },
        CountingWait {
            calls: Arc::clone(&waits),
        },
    );
    (poller, messages, waits)
}

// ---------------------------------------------------------------------------
// Transition detection and notification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn newly_available_store_publishes_one_found_notification() {
    let (mut poller, messages, _) = poller(vec![Ok(vec![store("SoHo", true)])]);

    poller.tick().await.unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("SoHo has AirPods Pro"));
    assert!(messages[0].contains("https://store.apple.com/xc/product/MWP22"));
    assert!(poller.available.contains("SoHo"));
}

#[tokio::test]
async fn repeated_available_response_is_idempotent() {
    let (mut poller, messages, _) = poller(vec![
        Ok(vec![store("SoHo", true)]),
        Ok(vec![store("SoHo", true)]),
    ]);

    poller.tick().await.unwrap();
    poller.tick().await.unwrap();

    // One transition, one notification — the second identical cycle is silent.
    assert_eq!(messages.lock().unwrap().len(), 1);
    assert!(poller.available.contains("SoHo"));
}

#[tokio::test]
async fn found_gone_found_emits_three_notifications() {
    let (mut poller, messages, _) = poller(vec![
        Ok(vec![store("SoHo", true)]),
        Ok(vec![store("SoHo", false)]),
        Ok(vec![store("SoHo", true)]),
    ]);

    poller.tick().await.unwrap();
    assert!(poller.available.contains("SoHo"));

    poller.tick().await.unwrap();
    assert!(!poller.available.contains("SoHo"));

    poller.tick().await.unwrap();
    assert!(poller.available.contains("SoHo"));

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].contains("Found it!"));
    assert!(messages[1].contains("are gone"));
    assert!(messages[2].contains("Found it!"));
}

#[tokio::test]
async fn store_absent_from_a_response_keeps_its_state() {
    let (mut poller, messages, _) = poller(vec![
        Ok(vec![store("SoHo", true), store("Grand Central", true)]),
        Ok(vec![store("Grand Central", false)]),
    ]);

    poller.tick().await.unwrap();
    poller.tick().await.unwrap();

    assert!(poller.available.contains("SoHo"), "absent store unchanged");
    assert!(!poller.available.contains("Grand Central"));
    assert_eq!(messages.lock().unwrap().len(), 3); // two found + one gone
}

#[tokio::test]
async fn unavailable_unknown_store_stays_silent() {
    let (mut poller, messages, _) = poller(vec![Ok(vec![store("SoHo", false)])]);

    poller.tick().await.unwrap();

    assert!(messages.lock().unwrap().is_empty());
    assert!(poller.available.is_empty());
}

// ---------------------------------------------------------------------------
// Startup confirmation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn startup_confirmation_waits_for_a_response_with_stores() {
    let (mut poller, _, _) = poller(vec![Ok(vec![]), Ok(vec![store("SoHo", false)])]);

    poller.tick().await.unwrap();
    assert!(!poller.started, "no stores yet — nothing to confirm");

    poller.tick().await.unwrap();
    assert!(poller.started);
}

#[tokio::test]
async fn startup_flag_stays_set_across_cycles() {
    let (mut poller, _, _) = poller(vec![
        Ok(vec![store("SoHo", false)]),
        Ok(vec![store("SoHo", true)]),
    ]);

    poller.tick().await.unwrap();
    assert!(poller.started);
    poller.tick().await.unwrap();
    assert!(poller.started);
}

// ---------------------------------------------------------------------------
// Error classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn transient_error_is_absorbed_without_notification() {
    let (mut poller, messages, _) = poller(vec![Err(transient_error())]);

    let result = poller.tick().await;

    assert!(result.is_ok(), "transient errors never stop the watch");
    assert!(messages.lock().unwrap().is_empty());
    assert!(poller.available.is_empty());
}

#[tokio::test]
async fn unclassified_upstream_message_is_absorbed() {
    let (mut poller, _, _) = poller(vec![Err(ClientError::Upstream(
        "Service temporarily unavailable".to_owned(),
    ))]);

    assert!(poller.tick().await.is_ok());
}

#[tokio::test]
async fn fatal_input_error_stops_the_watch() {
    let (mut poller, messages, _) = poller(vec![Err(fatal_error())]);

    let result = poller.tick().await;

    assert!(
        matches!(result, Err(WatchError::FatalInput(ClientError::RejectedInput(_)))),
        "expected FatalInput, got: {result:?}"
    );
    assert!(messages.lock().unwrap().is_empty(), "errors never notify");
}

#[tokio::test]
async fn transient_error_does_not_drop_known_stores() {
    let (mut poller, messages, _) = poller(vec![
        Ok(vec![store("SoHo", true)]),
        Err(transient_error()),
        Ok(vec![store("SoHo", true)]),
    ]);

    poller.tick().await.unwrap();
    poller.tick().await.unwrap();
    poller.tick().await.unwrap();

    // Still one notification total: the store never actually transitioned.
    assert_eq!(messages.lock().unwrap().len(), 1);
    assert!(poller.available.contains("SoHo"));
}

// ---------------------------------------------------------------------------
// Notification delivery failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_publish_does_not_corrupt_the_set() {
    let (mut poller, messages, _) = poller_with_failing_notifier(
        vec![
            Ok(vec![store("SoHo", true)]),
            Ok(vec![store("SoHo", true)]),
        ],
        true,
    );

    poller.tick().await.unwrap();
    assert!(poller.available.contains("SoHo"), "set updated before publish");

    poller.tick().await.unwrap();
    // No re-notification: the loop does not retry failed publishes.
    assert_eq!(messages.lock().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// The run loop
// ---------------------------------------------------------------------------

#[tokio::test]
async fn run_sleeps_before_every_fetch_and_stops_on_fatal() {
    let (poller, messages, waits) = poller(vec![Err(transient_error()), Err(fatal_error())]);

    let result = poller.run().await;

    assert!(matches!(result, Err(WatchError::FatalInput(_))));
    // One wait per cycle: the transient cycle consumed one full interval,
    // then the fatal cycle stopped the loop. No further fetches.
    assert_eq!(waits.load(Ordering::SeqCst), 2);
    assert!(messages.lock().unwrap().is_empty());
}
