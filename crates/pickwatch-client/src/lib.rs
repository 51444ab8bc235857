//! HTTP client for the retail in-store pickup availability endpoint.
//!
//! One GET per call, no client-side retries: the poll loop owns the fixed
//! sleep-and-continue cadence, so a failed fetch is classified and returned,
//! never retried here. The error taxonomy separates transient conditions
//! (network, malformed responses, unrecognized upstream messages) from the
//! permanent input errors that must stop the process.

pub mod client;
pub mod error;
pub mod parse;
pub mod types;

pub use client::PickupClient;
pub use error::ClientError;
pub use parse::parse_pickup_response;
