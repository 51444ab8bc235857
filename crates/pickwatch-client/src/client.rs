//! HTTP client for the pickup-message endpoint.
//!
//! Wraps `reqwest` with timeouts, a configured `User-Agent`, and typed
//! error classification. One GET per call; retry cadence belongs to the
//! caller's poll loop, not here.

use std::time::Duration;

use reqwest::{Client, Url};

use pickwatch_core::{PollTarget, StoreAvailability};

use crate::error::ClientError;
use crate::parse::parse_pickup_response;

/// Client for the retail in-store pickup availability endpoint.
///
/// Use [`PickupClient::new`] against the production endpoint or
/// [`PickupClient::with_endpoint`] to point at a mock server in tests.
pub struct PickupClient {
    client: Client,
    endpoint: Url,
}

const DEFAULT_ENDPOINT: &str = "https://www.apple.com/shop/retail/pickup-message";

impl PickupClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        Self::with_endpoint(timeout_secs, user_agent, DEFAULT_ENDPOINT)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock,
    /// or for regional endpoint overrides).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(
        timeout_secs: u64,
        user_agent: &str,
        endpoint: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint_url = Url::parse(endpoint).map_err(|e| ClientError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint: endpoint_url,
        })
    }

    /// Fetches current per-store availability for the target's model and area.
    ///
    /// At most `store_limit` stores from the response are interpreted.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] — network-level failure (DNS, timeout, TLS).
    /// - [`ClientError::UnexpectedStatus`] — non-2xx HTTP status.
    /// - [`ClientError::RejectedInput`] — upstream rejected the model or area
    ///   (permanent; callers must stop polling).
    /// - Any other parse-level variant from
    ///   [`parse_pickup_response`](crate::parse::parse_pickup_response)
    ///   (all transient).
    pub async fn fetch_availability(
        &self,
        target: &PollTarget,
        store_limit: usize,
    ) -> Result<Vec<StoreAvailability>, ClientError> {
        let url = self.build_url(target.model(), target.area());
        tracing::debug!(model = target.model(), area = target.area(), "querying pickup endpoint");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        parse_pickup_response(&body, target.model(), store_limit, url.as_str())
    }

    /// Builds the lookup URL with properly percent-encoded query parameters:
    /// `parts.0=<model>` and `location=<area>`.
    fn build_url(&self, model: &str, area: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("parts.0", model)
            .append_pair("location", area);
        url
    }
}
