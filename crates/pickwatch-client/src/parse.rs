//! Interpretation of a pickup-message response body.
//!
//! Separated from the transport so classification is unit-testable without
//! HTTP. The error field takes priority: whenever `errorMessage` is present
//! it is classified (fatal or transient) before the `stores` array is even
//! required, matching the upstream's habit of replacing the stores
//! container with an error message.

use pickwatch_core::StoreAvailability;

use crate::error::{classify_upstream_message, ClientError};
use crate::types::{PickupBody, PickupResponse, PickupStore};

/// The `pickupDisplay` value meaning the item can actually be picked up;
/// every other value collapses to not-available.
const PICKUP_AVAILABLE: &str = "available";

/// Parses a raw response body into per-store availability records.
///
/// At most `store_limit` stores are processed; the upstream has been seen
/// returning more, with no documented ordering contract beyond proximity.
///
/// # Errors
///
/// - [`ClientError::Deserialize`] — body is not the expected envelope.
/// - [`ClientError::RejectedInput`] — upstream error message in the fatal set.
/// - [`ClientError::Upstream`] — any other upstream error message.
/// - [`ClientError::MissingField`] — no error message and no stores array.
/// - [`ClientError::MissingAvailability`] — a store entry has no usable
///   record for the requested model.
pub fn parse_pickup_response(
    raw: &str,
    model: &str,
    store_limit: usize,
    context: &str,
) -> Result<Vec<StoreAvailability>, ClientError> {
    let response: PickupResponse =
        serde_json::from_str(raw).map_err(|e| ClientError::Deserialize {
            context: context.to_owned(),
            source: e,
        })?;
    interpret_body(response.body, model, store_limit)
}

fn interpret_body(
    body: PickupBody,
    model: &str,
    store_limit: usize,
) -> Result<Vec<StoreAvailability>, ClientError> {
    // Fatal-string check first whenever the error field is present.
    if let Some(message) = body.error_message {
        return Err(classify_upstream_message(&message));
    }

    let Some(mut stores) = body.stores else {
        return Err(ClientError::MissingField { field: "stores" });
    };
    stores.truncate(store_limit);

    stores.into_iter().map(|s| store_record(s, model)).collect()
}

fn store_record(store: PickupStore, model: &str) -> Result<StoreAvailability, ClientError> {
    let PickupStore {
        store_name,
        mut parts_availability,
    } = store;

    let part = parts_availability
        .remove(model)
        .ok_or_else(|| ClientError::MissingAvailability {
            store: store_name.clone(),
            model: model.to_owned(),
        })?;
    let product_title =
        part.store_pickup_product_title
            .ok_or_else(|| ClientError::MissingAvailability {
                store: store_name.clone(),
                model: model.to_owned(),
            })?;
    let available = part.pickup_display.as_deref() == Some(PICKUP_AVAILABLE);

    Ok(StoreAvailability {
        store_name,
        product_title,
        available,
    })
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
