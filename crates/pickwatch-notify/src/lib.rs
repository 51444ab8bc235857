//! Outbound notification transport.
//!
//! The poll loop only knows the [`Notify`] trait: publish one text message,
//! fire-and-forget. Delivery policy — retries, backoff, timeouts — lives
//! entirely inside the implementations, configured once at startup and
//! passed in explicitly.

pub mod console;
pub mod error;
mod retry;
pub mod webhook;

pub use console::ConsoleNotifier;
pub use error::NotifyError;
pub use webhook::{NotifierConfig, WebhookNotifier};

/// A notification sink accepting a single text message.
///
/// Delivery semantics (retry, ordering, acknowledgment) are the
/// implementation's concern; callers treat `publish` as fire-and-forget
/// and must not let a failed publish affect their own state.
#[allow(async_fn_in_trait)]
pub trait Notify {
    /// Publishes one message.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] when delivery ultimately fails after the
    /// implementation's own retry policy is exhausted.
    async fn publish(&self, message: &str) -> Result<(), NotifyError>;
}
