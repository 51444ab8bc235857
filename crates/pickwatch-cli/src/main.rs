//! pickwatch — watch in-store pickup availability for one product model.
//!
//! Polls the retail pickup-message endpoint on a fixed interval, tracks
//! which nearby stores currently have the item, and publishes a
//! notification on every availability transition. Exits 0 on interrupt and
//! 1 when the upstream rejects the model or area.

mod watch;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pickwatch_client::PickupClient;
use pickwatch_core::PollTarget;
use pickwatch_notify::{ConsoleNotifier, Notify, NotifierConfig, WebhookNotifier};

use crate::watch::{Fetch, PickupFetch, Poller, SpinnerWait, Wait};

#[derive(Debug, Parser)]
#[command(name = "pickwatch")]
#[command(about = "Watch in-store pickup availability and notify on changes")]
struct Args {
    /// Product model identifier to watch (e.g. MWP22LL/A)
    model: String,

    /// Area to search: postal code or a "city state" string
    area: String,

    /// Poll interval in seconds
    #[arg(long, default_value_t = 5)]
    interval: u64,

    /// Webhook URL for outbound notifications (overrides PICKWATCH_WEBHOOK_URL)
    #[arg(long)]
    webhook_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = pickwatch_core::load_app_config()?;
    if let Some(url) = args.webhook_url {
        config.webhook_url = Some(url);
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let target = PollTarget::new(&args.model, &args.area, args.interval)?;
    let client = PickupClient::with_endpoint(
        config.request_timeout_secs,
        &config.user_agent,
        &config.endpoint_url,
    )?;
    let fetch = PickupFetch::new(client, target.clone(), config.store_limit);

    tracing::info!(
        model = target.model(),
        area = target.area(),
        interval_secs = target.interval_secs(),
        store_limit = config.store_limit,
        "starting pickup watch"
    );

    match config.webhook_url.clone() {
        Some(url) => {
            let notifier = WebhookNotifier::new(&NotifierConfig {
                url,
                timeout_secs: config.notify_timeout_secs,
                max_retries: config.notify_max_retries,
                backoff_base_ms: config.notify_backoff_base_ms,
            })?;
            run_until_interrupt(Poller::new(target, fetch, notifier, SpinnerWait::new())).await
        }
        None => {
            tracing::warn!("no webhook configured — notifications go to the console");
            run_until_interrupt(Poller::new(target, fetch, ConsoleNotifier, SpinnerWait::new()))
                .await
        }
    }
}

/// Runs the poller until it stops on a permanent input error (propagated,
/// exit status 1) or the operator interrupts (clean exit, status 0).
async fn run_until_interrupt<F: Fetch, N: Notify, W: Wait>(
    poller: Poller<F, N, W>,
) -> anyhow::Result<()> {
    tokio::select! {
        result = poller.run() => result.map_err(Into::into),
        _ = tokio::signal::ctrl_c() => {
            println!();
            tracing::info!("interrupted — stopping watch");
            Ok(())
        }
    }
}
