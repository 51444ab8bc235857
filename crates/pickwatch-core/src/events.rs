//! Text builders for console output and outbound notifications.
//!
//! Every builder takes the event time explicitly so callers pass
//! `Local::now()` in production and a pinned time in tests. Formats carry
//! the information that matters — timestamp, store names, product title,
//! transition kind — without being a compatibility surface.

use chrono::{DateTime, Local};

/// Product page base; the model identifier is appended.
pub const BUY_URL_BASE: &str = "https://store.apple.com/xc/product/";

const TIMESTAMP_FORMAT: &str = "[%m/%d/%Y-%H:%M:%S]";

fn stamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// One-time confirmation printed on the first successful fetch.
#[must_use]
pub fn monitoring_started(at: DateTime<Local>, product_title: &str, area: &str) -> String {
    format!(
        "{} Start monitoring {product_title} inventory in area {area}.",
        stamp(at)
    )
}

/// Notification for a store transitioning to available, with a purchase link.
#[must_use]
pub fn found_available(at: DateTime<Local>, store_name: &str, product_title: &str, model: &str) -> String {
    format!(
        "{} Found it! {store_name} has {product_title}! {BUY_URL_BASE}{model}",
        stamp(at)
    )
}

/// Notification for a store transitioning away from available.
#[must_use]
pub fn no_longer_available(at: DateTime<Local>, product_title: &str, store_name: &str) -> String {
    format!(
        "{} All {product_title} at {store_name} are gone.",
        stamp(at)
    )
}

/// Recurring status line listing every currently-available store.
#[must_use]
pub fn still_available(at: DateTime<Local>, joined_store_names: &str) -> String {
    format!("{} Still available: {joined_store_names}", stamp(at))
}
