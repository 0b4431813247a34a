//! Row building for the events table.

use std::collections::HashMap;

use serde::Serialize;

use crate::classification::{classify_edge, EdgeType};
use crate::formatting::{
    format_number_fixed_three_decimals, format_time_for_display, INVALID_CELL_TEXT,
};
use crate::models::{Event, EventStatusRecord, LocationSolution, TimeRange};
use crate::rows::detection::rejected_cell;

/// Flat display row for one event.
///
/// Workflow status and active analysts come from the status lookup; a
/// missing entry renders as the unknown sentinel and an empty analyst list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub id: String,
    pub time: String,
    pub latitude_degrees: String,
    pub longitude_degrees: String,
    pub depth_km: String,
    pub magnitude_mb: String,
    pub magnitude_ms: String,
    pub confidence: String,
    pub status: String,
    pub active_analysts: Vec<String>,
    pub conflict: bool,
    pub rejected: String,
    pub is_open: bool,
    pub edge_event_type: EdgeType,
}

/// Builds the display row for a single event.
pub fn build_event_row(
    event: &Event,
    events: &[Event],
    event_statuses: &HashMap<String, EventStatusRecord>,
    open_event_id: Option<&str>,
    time_range: Option<&TimeRange>,
) -> EventRow {
    let current = event.current_hypothesis();
    let location = current.and_then(|h| h.location.as_ref());
    let solution = |get: fn(&LocationSolution) -> Option<f64>| location.and_then(get);
    let time_secs = solution(|l| l.time_secs);
    let status_record = event_statuses.get(&event.id);

    EventRow {
        id: event.id.clone(),
        time: format_time_for_display(time_secs),
        latitude_degrees: format_number_fixed_three_decimals(solution(|l| l.latitude_degrees)),
        longitude_degrees: format_number_fixed_three_decimals(solution(|l| l.longitude_degrees)),
        depth_km: format_number_fixed_three_decimals(solution(|l| l.depth_km)),
        magnitude_mb: format_number_fixed_three_decimals(current.and_then(|h| h.magnitude_mb)),
        magnitude_ms: format_number_fixed_three_decimals(current.and_then(|h| h.magnitude_ms)),
        confidence: format_number_fixed_three_decimals(current.and_then(|h| h.confidence)),
        status: status_record
            .map(|record| record.event_status.as_str().to_string())
            .unwrap_or_else(|| INVALID_CELL_TEXT.to_string()),
        active_analysts: status_record
            .map(|record| record.active_analyst_ids.clone())
            .unwrap_or_default(),
        conflict: has_shared_associations(event, events),
        rejected: rejected_cell(event.rejected),
        is_open: open_event_id == Some(event.id.as_str()),
        edge_event_type: classify_edge(time_range, time_secs),
    }
}

/// Builds rows for the events table.
///
/// Returns an empty vector for an absent or empty input collection.
pub fn build_event_rows(
    events: Option<&[Event]>,
    event_statuses: &HashMap<String, EventStatusRecord>,
    open_event_id: Option<&str>,
    time_range: Option<&TimeRange>,
) -> Vec<EventRow> {
    let Some(events) = events.filter(|evts| !evts.is_empty()) else {
        return Vec::new();
    };
    events
        .iter()
        .map(|event| build_event_row(event, events, event_statuses, open_event_id, time_range))
        .collect()
}

/// True when the event's current hypothesis claims a detection that another
/// event's current hypothesis also claims.
fn has_shared_associations(event: &Event, events: &[Event]) -> bool {
    let Some(current) = event.current_hypothesis() else {
        return false;
    };
    events
        .iter()
        .filter(|other| other.id != event.id)
        .filter_map(|other| other.current_hypothesis())
        .any(|other_hypothesis| {
            current
                .associated_signal_detection_ids
                .iter()
                .any(|id| other_hypothesis.associated_signal_detection_ids.contains(id))
        })
}
