//! Webhook-backed notification publisher.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::NotifyError;
use crate::retry::retry_with_backoff;
use crate::Notify;

/// Constructor-supplied transport configuration.
///
/// Built once at startup from the application config and passed in
/// explicitly — the transport holds no process-wide mutable state.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub url: String,
    pub timeout_secs: u64,
    /// Additional delivery attempts after the first failure.
    pub max_retries: u32,
    /// Base delay for exponential back-off between attempts.
    pub backoff_base_ms: u64,
}

/// Publishes each message as a JSON POST to a configured webhook URL.
///
/// Retries transient delivery failures with exponential back-off; the retry
/// policy is this transport's own and is invisible to callers.
pub struct WebhookNotifier {
    client: Client,
    url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl WebhookNotifier {
    /// Builds a notifier from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NotifyError::InvalidUrl`] if the
    /// configured URL does not parse.
    pub fn new(config: &NotifierConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let url = Url::parse(&config.url).map_err(|e| NotifyError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            url,
            max_retries: config.max_retries,
            backoff_base_ms: config.backoff_base_ms,
        })
    }

    async fn post_once(&self, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

impl Notify for WebhookNotifier {
    async fn publish(&self, message: &str) -> Result<(), NotifyError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.post_once(message)
        })
        .await?;
        tracing::debug!("notification delivered");
        Ok(())
    }
}
