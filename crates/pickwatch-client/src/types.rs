//! Wire types for the pickup-message endpoint.
//!
//! ## Observed response shape
//!
//! Successful lookups return an envelope whose `body` carries a `stores`
//! array. Each store entry has `storeName` plus a `partsAvailability` map
//! keyed by model identifier; the per-model record carries
//! `storePickupProductTitle` and the tri-state `pickupDisplay`
//! (`"available"`, `"unavailable"`, `"ineligible"` — only the first means
//! the item can be picked up).
//!
//! Error responses reuse the same envelope but the `body` carries an
//! `errorMessage` string where the stores container would normally be, so
//! both fields are optional here and interpretation happens in `parse`.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level envelope from the pickup-message endpoint.
#[derive(Debug, Deserialize)]
pub struct PickupResponse {
    pub body: PickupBody,
}

/// The `body` payload: either a list of candidate stores or an upstream
/// error message, never contractually both.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupBody {
    #[serde(default)]
    pub stores: Option<Vec<PickupStore>>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One candidate store from the `stores` array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupStore {
    pub store_name: String,
    /// Keyed by model identifier; only the requested model's entry is used.
    #[serde(default)]
    pub parts_availability: HashMap<String, PartPickup>,
}

/// Per-model pickup record inside a store entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartPickup {
    #[serde(default)]
    pub store_pickup_product_title: Option<String>,
    #[serde(default)]
    pub pickup_display: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_store_entry() {
        let json = r#"{
            "storeName": "SoHo",
            "partsAvailability": {
                "MWP22": {
                    "storePickupProductTitle": "AirPods Pro",
                    "pickupDisplay": "available"
                }
            }
        }"#;

        let store: PickupStore = serde_json::from_str(json).unwrap();
        assert_eq!(store.store_name, "SoHo");
        let part = &store.parts_availability["MWP22"];
        assert_eq!(part.store_pickup_product_title.as_deref(), Some("AirPods Pro"));
        assert_eq!(part.pickup_display.as_deref(), Some("available"));
    }

    #[test]
    fn deserializes_error_body() {
        let json = r#"{"body": {"errorMessage": "Invalid zip code or city/state."}}"#;
        let response: PickupResponse = serde_json::from_str(json).unwrap();
        assert!(response.body.stores.is_none());
        assert_eq!(
            response.body.error_message.as_deref(),
            Some("Invalid zip code or city/state.")
        );
    }

    #[test]
    fn tolerates_missing_part_fields() {
        let json = r#"{"storeName": "SoHo", "partsAvailability": {"MWP22": {}}}"#;
        let store: PickupStore = serde_json::from_str(json).unwrap();
        let part = &store.parts_availability["MWP22"];
        assert!(part.store_pickup_product_title.is_none());
        assert!(part.pickup_display.is_none());
    }
}
