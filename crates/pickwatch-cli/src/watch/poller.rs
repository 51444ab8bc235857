//! The inventory poller: an unbounded wait-fetch-classify-notify loop.
//!
//! One logical thread, strictly sequential. The only cross-cycle state is
//! the known-available set and the one-shot started flag. Collaborators are
//! injected behind small traits so tests drive scripted cycles with no
//! sleeping and no network.

use chrono::Local;
use thiserror::Error;

use pickwatch_client::ClientError;
use pickwatch_core::{events, AvailabilitySet, PollTarget, StoreAvailability, Transition};
use pickwatch_notify::Notify;

/// Fetch collaborator: returns the current per-store availability or a
/// classified failure.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self) -> Result<Vec<StoreAvailability>, ClientError>;
}

/// Delay collaborator: blocks for the given number of seconds.
///
/// Production uses the spinner; tests substitute a counter so cycles run
/// instantly.
#[allow(async_fn_in_trait)]
pub trait Wait {
    async fn wait(&mut self, secs: u64);
}

/// The watch stops only for a permanent input error; everything else is
/// absorbed by the loop.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("aborting watch: {0}")]
    FatalInput(#[source] ClientError),
}

/// Polls one target on a fixed cadence and notifies on availability
/// transitions.
pub struct Poller<F, N, W> {
    target: PollTarget,
    fetch: F,
    notifier: N,
    wait: W,
    available: AvailabilitySet,
    started: bool,
}

impl<F: Fetch, N: Notify, W: Wait> Poller<F, N, W> {
    pub fn new(target: PollTarget, fetch: F, notifier: N, wait: W) -> Self {
        Self {
            target,
            fetch,
            notifier,
            wait,
            available: AvailabilitySet::new(),
            started: false,
        }
    }

    /// Runs until a permanent input error stops the watch.
    ///
    /// Each cycle waits one full interval before fetching; the interval
    /// bounds the minimum gap between fetch attempts, not a hard schedule.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::FatalInput`] when the upstream rejects the
    /// model or area. Transient failures never surface here.
    pub async fn run(mut self) -> Result<(), WatchError> {
        loop {
            self.wait.wait(self.target.interval_secs()).await;
            self.tick().await?;
        }
    }

    /// One poll cycle: fetch, classify, apply transitions, notify.
    async fn tick(&mut self) -> Result<(), WatchError> {
        let stores = match self.fetch.fetch().await {
            Ok(stores) => stores,
            Err(err) if err.is_fatal_input() => {
                tracing::error!(error = %err, "upstream rejected the poll target — stopping");
                return Err(WatchError::FatalInput(err));
            }
            Err(err) => {
                // Transient: one diagnostic line, then the loop sleeps a
                // full interval and tries again. No backoff, no retry budget.
                tracing::warn!(error = %err, "failed to query the pickup endpoint");
                return Ok(());
            }
        };

        if !self.started {
            // Confirmed once, on the first response that names the product.
            if let Some(first) = stores.first() {
                println!(
                    "{}",
                    events::monitoring_started(Local::now(), &first.product_title, self.target.area())
                );
                self.started = true;
            }
        }

        for store in &stores {
            match self.available.observe(&store.store_name, store.available) {
                Some(Transition::Found) => {
                    let message = events::found_available(
                        Local::now(),
                        &store.store_name,
                        &store.product_title,
                        self.target.model(),
                    );
                    self.publish(&message).await;
                }
                Some(Transition::Gone) => {
                    let message = events::no_longer_available(
                        Local::now(),
                        &store.product_title,
                        &store.store_name,
                    );
                    self.publish(&message).await;
                }
                None => {}
            }
        }

        if !self.available.is_empty() {
            println!(
                "{}",
                events::still_available(Local::now(), &self.available.summary())
            );
        }

        Ok(())
    }

    /// The set update already happened by the time this runs: a failed
    /// publish is logged and never retried by the loop, and never touches
    /// the known-available set.
    async fn publish(&self, message: &str) {
        if let Err(err) = self.notifier.publish(message).await {
            tracing::warn!(error = %err, "failed to publish notification");
        }
    }
}

#[cfg(test)]
#[path = "poller_test.rs"]
mod tests;
