use thiserror::Error;

/// Upstream error messages that mean the request itself is invalid.
///
/// Matched exactly: anything else in the error field is treated as a
/// transient service condition and retried on the next cycle.
pub const FATAL_INPUT_ERRORS: [&str; 2] = [
    "Products Invalid or not buyable",
    "Invalid zip code or city/state.",
];

/// Errors returned by the pickup availability client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx HTTP status from the endpoint.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response body parsed but carried no `{field}` field.
    #[error("response body has no {field} field")]
    MissingField { field: &'static str },

    /// A store entry lacks a usable pickup availability record for the model.
    #[error("store {store} has no usable pickup availability for model {model}")]
    MissingAvailability { store: String, model: String },

    /// The upstream reported an error message outside the fatal set.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The upstream rejected the model or area; polling again cannot succeed.
    #[error("request rejected by upstream: {0}")]
    RejectedInput(String),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl ClientError {
    /// `true` only for the permanent input errors that must terminate the
    /// process. Every other variant is transient: log, wait one interval,
    /// try again.
    #[must_use]
    pub fn is_fatal_input(&self) -> bool {
        matches!(self, ClientError::RejectedInput(_))
    }
}

/// Classifies an upstream error message: an exact match against
/// [`FATAL_INPUT_ERRORS`] is permanent, anything else transient.
pub(crate) fn classify_upstream_message(message: &str) -> ClientError {
    if FATAL_INPUT_ERRORS.contains(&message) {
        ClientError::RejectedInput(message.to_owned())
    } else {
        ClientError::Upstream(message.to_owned())
    }
}
