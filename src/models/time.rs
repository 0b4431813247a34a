//! Time ranges for display-interval classification.

use serde::{Deserialize, Serialize};

/// A viewing interval expressed in epoch seconds.
///
/// Both bounds are independently optional because the query layer delivers
/// partially populated ranges while an interval is being opened or synced.
/// `0.0` is a valid bound and must not be confused with an absent one.
///
/// # Examples
///
/// ```
/// use sia_rust::models::TimeRange;
///
/// let range = TimeRange::new(6000.0, 7000.0);
/// assert_eq!(range.duration_secs(), Some(1000.0));
/// assert!(range.is_well_formed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_time_secs: Option<f64>,
    pub end_time_secs: Option<f64>,
}

impl TimeRange {
    /// Creates a fully populated time range.
    pub fn new(start_time_secs: f64, end_time_secs: f64) -> Self {
        Self {
            start_time_secs: Some(start_time_secs),
            end_time_secs: Some(end_time_secs),
        }
    }

    /// Returns `(start, end)` when both bounds are present and numeric.
    ///
    /// NaN bounds are reported as absent so classification never has to
    /// compare against them.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.start_time_secs, self.end_time_secs) {
            (Some(start), Some(end)) if !start.is_nan() && !end.is_nan() => Some((start, end)),
            _ => None,
        }
    }

    /// Returns the interval length in seconds, when both bounds are present.
    pub fn duration_secs(&self) -> Option<f64> {
        self.bounds().map(|(start, end)| end - start)
    }

    /// A range is well formed when both bounds exist and start ≤ end.
    ///
    /// Callers treat malformed ranges as invalid input; nothing here
    /// enforces the ordering.
    pub fn is_well_formed(&self) -> bool {
        self.bounds().is_some_and(|(start, end)| start <= end)
    }
}
