//! Event domain models: events, hypotheses, location solutions, and
//! workflow status records.
//!
//! Events arrive from the query layer already resolved into hypothesis
//! collections ordered oldest to newest. Display code never mutates them;
//! it derives rows and classifications from the current hypothesis.

use serde::{Deserialize, Serialize};

/// Identifies a single hypothesis of a single event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHypothesisId {
    pub event_id: String,
    pub hypothesis_id: String,
}

/// A located origin estimate attached to an event hypothesis.
///
/// Every measurement is independently optional; absent values format as the
/// unknown sentinel at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSolution {
    pub time_secs: Option<f64>,
    pub latitude_degrees: Option<f64>,
    pub longitude_degrees: Option<f64>,
    pub depth_km: Option<f64>,
}

/// One analyst- or system-proposed interpretation of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHypothesis {
    pub id: EventHypothesisId,
    pub rejected: bool,
    /// Ids of the signal detections this hypothesis claims.
    #[serde(default)]
    pub associated_signal_detection_ids: Vec<String>,
    pub location: Option<LocationSolution>,
    pub magnitude_mb: Option<f64>,
    pub magnitude_ms: Option<f64>,
    pub confidence: Option<f64>,
}

/// An event with its full hypothesis history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub rejected: bool,
    #[serde(default)]
    pub event_hypotheses: Vec<EventHypothesis>,
}

impl Event {
    /// Returns the hypothesis display code should read from.
    ///
    /// The collection is ordered oldest to newest: the current hypothesis is
    /// the most recent non-rejected one, falling back to the original parent
    /// hypothesis when every entry has been rejected.
    pub fn current_hypothesis(&self) -> Option<&EventHypothesis> {
        self.event_hypotheses
            .iter()
            .rev()
            .find(|h| !h.rejected)
            .or_else(|| self.event_hypotheses.first())
    }
}

/// Workflow status of an event, as reported by the status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    NotStarted,
    InProgress,
    NotComplete,
    Complete,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::NotStarted => "NOT_STARTED",
            EventStatus::InProgress => "IN_PROGRESS",
            EventStatus::NotComplete => "NOT_COMPLETE",
            EventStatus::Complete => "COMPLETE",
        }
    }
}

/// Resolved status entry for one event, keyed by event id in lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatusRecord {
    pub event_id: String,
    pub event_status: EventStatus,
    #[serde(default)]
    pub active_analyst_ids: Vec<String>,
}
