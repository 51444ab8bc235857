/// Process-wide configuration loaded from environment variables.
///
/// The poll target itself (model, area, interval) comes from command-line
/// arguments; everything ambient — endpoint, timeouts, limits, the
/// notification transport — lives here and is passed explicitly to the
/// collaborators that need it.
#[derive(Clone)]
pub struct AppConfig {
    pub endpoint_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on stores processed per response. Inherited default of 8
    /// matches the upstream response shape but is not an API contract.
    pub store_limit: usize,
    pub webhook_url: Option<String>,
    pub notify_timeout_secs: u64,
    pub notify_max_retries: u32,
    pub notify_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Webhook URLs often embed tokens; keep them out of logs.
        f.debug_struct("AppConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("store_limit", &self.store_limit)
            .field("webhook_url", &self.webhook_url.as_ref().map(|_| "[redacted]"))
            .field("notify_timeout_secs", &self.notify_timeout_secs)
            .field("notify_max_retries", &self.notify_max_retries)
            .field("notify_backoff_base_ms", &self.notify_backoff_base_ms)
            .finish()
    }
}
