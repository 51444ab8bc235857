//! Console wait indicator.

use std::io::Write as _;
use std::time::Duration;

use crate::watch::poller::Wait;

const FRAMES: [char; 4] = ['-', '\\', '|', '/'];

/// Production [`Wait`]: refreshes a `Checking...` indicator once per second
/// for the whole interval, without issuing any fetches. The frame index
/// carries over between cycles so the animation is continuous.
pub struct SpinnerWait {
    frame: usize,
}

impl SpinnerWait {
    #[must_use]
    pub fn new() -> Self {
        Self { frame: 0 }
    }
}

impl Default for SpinnerWait {
    fn default() -> Self {
        Self::new()
    }
}

impl Wait for SpinnerWait {
    async fn wait(&mut self, secs: u64) {
        for _ in 0..secs {
            print!("Checking...{}\r", FRAMES[self.frame]);
            let _ = std::io::stdout().flush();
            self.frame = (self.frame + 1) % FRAMES.len();
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }
}
