//! Per-store availability records and the cross-cycle known-available set.
//!
//! The set is the only state that survives between poll cycles. Membership
//! is the contract: a store name is in the set exactly when the most recent
//! response that mentioned it reported the item available for pickup.

/// One store's availability as derived from a single response.
///
/// Ephemeral: recomputed from every fetch, never persisted. The upstream
/// field is tri-state; anything other than `"available"` collapses to
/// `available == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreAvailability {
    pub store_name: String,
    pub product_title: String,
    pub available: bool,
}

/// A change in one store's availability between two consecutive observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The store was not in the known-available set and now reports available.
    Found,
    /// The store was in the known-available set and no longer reports available.
    Gone,
}

/// Insertion-ordered set of store names currently believed to have the item.
///
/// Membership is the only correctness property; insertion order is kept so
/// the summary line reads stably. The set is bounded by the configured
/// store limit, so a linear scan is fine.
#[derive(Debug, Default)]
pub struct AvailabilitySet {
    stores: Vec<String>,
}

impl AvailabilitySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one observation and reports the transition, if any.
    ///
    /// Newly available stores are inserted and yield [`Transition::Found`];
    /// known stores observed unavailable are removed and yield
    /// [`Transition::Gone`]. The two no-change cases (already known and
    /// still available, unknown and still unavailable) return `None` and
    /// leave the set untouched.
    pub fn observe(&mut self, store_name: &str, available: bool) -> Option<Transition> {
        let position = self.stores.iter().position(|s| s == store_name);
        match (position, available) {
            (None, true) => {
                self.stores.push(store_name.to_owned());
                Some(Transition::Found)
            }
            (Some(i), false) => {
                self.stores.remove(i);
                Some(Transition::Gone)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, store_name: &str) -> bool {
        self.stores.iter().any(|s| s == store_name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Store names in insertion order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.stores
    }

    /// Comma-joined store names for the status line.
    #[must_use]
    pub fn summary(&self) -> String {
        self.stores.join(", ")
    }
}

#[cfg(test)]
#[path = "availability_test.rs"]
mod tests;
