//! The watch loop: wait one interval, fetch, detect transitions, notify.

mod poller;
mod spinner;

pub use poller::{Fetch, Poller, Wait, WatchError};
pub use spinner::SpinnerWait;

use pickwatch_client::{ClientError, PickupClient};
use pickwatch_core::{PollTarget, StoreAvailability};

/// Production [`Fetch`]: one pickup-endpoint lookup per cycle for a fixed
/// target, capped at the configured store limit.
pub struct PickupFetch {
    client: PickupClient,
    target: PollTarget,
    store_limit: usize,
}

impl PickupFetch {
    pub fn new(client: PickupClient, target: PollTarget, store_limit: usize) -> Self {
        Self {
            client,
            target,
            store_limit,
        }
    }
}

impl Fetch for PickupFetch {
    async fn fetch(&self) -> Result<Vec<StoreAvailability>, ClientError> {
        self.client
            .fetch_availability(&self.target, self.store_limit)
            .await
    }
}
