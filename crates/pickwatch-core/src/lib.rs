//! Domain types and configuration for the pickup-availability watcher.
//!
//! Holds everything the other crates share: the immutable poll target, the
//! in-memory availability set with its transition logic, the timestamped
//! event text builders, and the env-driven application configuration.

pub mod app_config;
pub mod availability;
pub mod config;
pub mod events;
pub mod target;

pub use app_config::AppConfig;
pub use availability::{AvailabilitySet, StoreAvailability, Transition};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use target::{PollTarget, TargetError};
