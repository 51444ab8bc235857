use thiserror::Error;

/// Validation errors for [`PollTarget`].
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("product model must not be empty")]
    EmptyModel,

    #[error("area must not be empty")]
    EmptyArea,

    #[error("poll interval must be at least 1 second, got {0}")]
    IntervalTooShort(u64),
}

/// What to watch: one product model, one area, one poll cadence.
///
/// Fixed at startup and immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct PollTarget {
    model: String,
    area: String,
    interval_secs: u64,
}

impl PollTarget {
    /// Builds a validated poll target.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError`] if the model or area is empty (after
    /// trimming) or the interval is below one second.
    pub fn new(model: &str, area: &str, interval_secs: u64) -> Result<Self, TargetError> {
        let model = model.trim();
        let area = area.trim();
        if model.is_empty() {
            return Err(TargetError::EmptyModel);
        }
        if area.is_empty() {
            return Err(TargetError::EmptyArea);
        }
        if interval_secs < 1 {
            return Err(TargetError::IntervalTooShort(interval_secs));
        }
        Ok(Self {
            model: model.to_owned(),
            area: area.to_owned(),
            interval_secs,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    /// Minimum gap between fetch attempts, in seconds. Not a hard schedule:
    /// processing time drifts the cycle and that is acceptable.
    #[must_use]
    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }
}
