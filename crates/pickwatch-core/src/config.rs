use thiserror::Error;

use crate::app_config::AppConfig;

/// Errors from reading configuration out of the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable has an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable has an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let endpoint_url = or_default(
        "PICKWATCH_ENDPOINT_URL",
        "https://www.apple.com/shop/retail/pickup-message",
    );
    let log_level = or_default("PICKWATCH_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("PICKWATCH_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "PICKWATCH_USER_AGENT",
        "pickwatch/0.1 (pickup-availability)",
    );
    let store_limit = parse_usize("PICKWATCH_STORE_LIMIT", "8")?;
    let webhook_url = lookup("PICKWATCH_WEBHOOK_URL").ok();
    let notify_timeout_secs = parse_u64("PICKWATCH_NOTIFY_TIMEOUT_SECS", "10")?;
    let notify_max_retries = parse_u32("PICKWATCH_NOTIFY_MAX_RETRIES", "10")?;
    let notify_backoff_base_ms = parse_u64("PICKWATCH_NOTIFY_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        endpoint_url,
        log_level,
        request_timeout_secs,
        user_agent,
        store_limit,
        webhook_url,
        notify_timeout_secs,
        notify_max_retries,
        notify_backoff_base_ms,
    })
}
