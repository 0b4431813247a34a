//! Placement of timestamps relative to the open viewing interval.

use serde::{Deserialize, Serialize};

use crate::formatting::INVALID_CELL_TEXT;
use crate::models::TimeRange;

/// Where an item's timestamp falls relative to the viewing interval.
///
/// `Invalid` marks items whose timestamp or interval bounds are missing;
/// they display as the unknown sentinel rather than failing the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeType {
    Before,
    After,
    Interval,
    #[serde(rename = "Unknown")]
    Invalid,
}

impl EdgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::Before => "Before",
            EdgeType::After => "After",
            EdgeType::Interval => "Interval",
            EdgeType::Invalid => INVALID_CELL_TEXT,
        }
    }

    /// Edge rows (anything outside the interval proper) render dimmed.
    pub fn is_edge(&self) -> bool {
        *self != EdgeType::Interval
    }
}

/// Classifies a timestamp against a viewing interval.
///
/// Returns [`EdgeType::Invalid`] when the timestamp, the range, or either
/// range bound is absent; `0.0` is a valid timestamp and a valid bound.
/// Bound comparisons are inclusive: a timestamp equal to either bound is in
/// the interval.
///
/// # Examples
///
/// ```
/// use sia_rust::classification::{classify_edge, EdgeType};
/// use sia_rust::models::TimeRange;
///
/// let range = TimeRange::new(6000.0, 7000.0);
/// assert_eq!(classify_edge(Some(&range), Some(5000.0)), EdgeType::Before);
/// assert_eq!(classify_edge(Some(&range), Some(6500.0)), EdgeType::Interval);
/// assert_eq!(classify_edge(Some(&range), Some(9000.0)), EdgeType::After);
/// assert_eq!(classify_edge(None, Some(6459.0)), EdgeType::Invalid);
/// ```
pub fn classify_edge(time_range: Option<&TimeRange>, timestamp_secs: Option<f64>) -> EdgeType {
    let Some(timestamp) = timestamp_secs.filter(|t| !t.is_nan()) else {
        return EdgeType::Invalid;
    };
    let Some((start, end)) = time_range.and_then(TimeRange::bounds) else {
        return EdgeType::Invalid;
    };
    if timestamp < start {
        EdgeType::Before
    } else if timestamp > end {
        EdgeType::After
    } else {
        EdgeType::Interval
    }
}
