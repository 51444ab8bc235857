//! Console fallback publisher.

use crate::error::NotifyError;
use crate::Notify;

/// Prints each message to stdout. Used when no webhook is configured so
/// transitions still reach the operator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    async fn publish(&self, message: &str) -> Result<(), NotifyError> {
        println!("{message}");
        Ok(())
    }
}
