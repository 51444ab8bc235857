use thiserror::Error;

/// Errors from the notification transport.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook receiver answered with a non-2xx status.
    #[error("webhook returned HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// The configured webhook URL is not a valid URL.
    #[error("invalid webhook URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
