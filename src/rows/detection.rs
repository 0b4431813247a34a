//! Row building for the signal-detections table.

use std::collections::HashMap;

use serde::Serialize;

use crate::classification::{
    association_status, classify_edge, has_association_conflict, AssociationStatus, EdgeType,
};
use crate::formatting::{
    format_number_fixed_three_decimals, format_rectilinearity_or_emergence,
    format_time_for_display, table_cell_string,
};
use crate::models::{Event, EventStatusRecord, FeatureMeasurements, SignalDetection, TimeRange};

/// Flat display row for one signal detection.
///
/// Numeric fields are pre-formatted strings; the raw values stay on the
/// domain objects. `rejected` is the literal `"True"`/`"False"` expected by
/// the table's comparators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalDetectionRow {
    pub id: String,
    pub assoc_status: AssociationStatus,
    pub conflict: bool,
    pub station: String,
    pub channel: String,
    pub phase: String,
    pub phase_confidence: String,
    pub time: String,
    pub time_standard_deviation: String,
    pub azimuth: String,
    pub azimuth_standard_deviation: String,
    pub slowness: String,
    pub slowness_standard_deviation: String,
    pub amplitude: String,
    pub period: String,
    pub snr: String,
    pub rectilinearity: String,
    pub emergence_angle: String,
    pub short_period_first_motion: String,
    pub long_period_first_motion: String,
    pub rejected: String,
    pub edge_type: EdgeType,
}

/// Builds the display row for a single signal detection.
pub fn build_signal_detection_row(
    sd: &SignalDetection,
    events: &[Event],
    event_statuses: &HashMap<String, EventStatusRecord>,
    open_event_id: Option<&str>,
    time_range: Option<&TimeRange>,
) -> SignalDetectionRow {
    let current = sd.current_hypothesis();
    let fm = current.map(|h| &h.feature_measurements);
    let measurement = |get: fn(&FeatureMeasurements) -> Option<f64>| fm.and_then(get);
    let arrival_time = measurement(|m| m.arrival_time_secs);

    SignalDetectionRow {
        id: sd.id.clone(),
        assoc_status: association_status(sd, events, open_event_id, event_statuses),
        conflict: has_association_conflict(sd, events),
        station: table_cell_string(Some(sd.station_name.as_str())),
        channel: table_cell_string(fm.and_then(|m| m.channel_name.as_deref())),
        phase: table_cell_string(fm.and_then(|m| m.phase.as_deref())),
        phase_confidence: format_number_fixed_three_decimals(measurement(|m| m.phase_confidence)),
        time: format_time_for_display(arrival_time),
        time_standard_deviation: format_number_fixed_three_decimals(
            measurement(|m| m.arrival_time_std_dev_secs),
        ),
        azimuth: format_number_fixed_three_decimals(measurement(|m| m.azimuth_degrees)),
        azimuth_standard_deviation: format_number_fixed_three_decimals(
            measurement(|m| m.azimuth_std_dev_degrees),
        ),
        slowness: format_number_fixed_three_decimals(measurement(|m| m.slowness_sec_per_degree)),
        slowness_standard_deviation: format_number_fixed_three_decimals(
            measurement(|m| m.slowness_std_dev_sec_per_degree),
        ),
        amplitude: format_number_fixed_three_decimals(measurement(|m| m.amplitude)),
        period: format_number_fixed_three_decimals(measurement(|m| m.period_secs)),
        snr: format_number_fixed_three_decimals(measurement(|m| m.snr)),
        rectilinearity: format_rectilinearity_or_emergence(measurement(|m| m.rectilinearity)),
        emergence_angle: format_rectilinearity_or_emergence(
            measurement(|m| m.emergence_angle_degrees),
        ),
        short_period_first_motion: table_cell_string(
            fm.and_then(|m| m.short_period_first_motion.as_deref()),
        ),
        long_period_first_motion: table_cell_string(
            fm.and_then(|m| m.long_period_first_motion.as_deref()),
        ),
        rejected: rejected_cell(current.map(|h| h.rejected).unwrap_or(false)),
        edge_type: classify_edge(time_range, arrival_time),
    }
}

/// Builds rows for the signal-detections table.
///
/// Returns an empty vector for an absent or empty input collection.
pub fn build_signal_detection_rows(
    signal_detections: Option<&[SignalDetection]>,
    events: &[Event],
    event_statuses: &HashMap<String, EventStatusRecord>,
    open_event_id: Option<&str>,
    time_range: Option<&TimeRange>,
) -> Vec<SignalDetectionRow> {
    let Some(signal_detections) = signal_detections.filter(|sds| !sds.is_empty()) else {
        return Vec::new();
    };
    signal_detections
        .iter()
        .map(|sd| build_signal_detection_row(sd, events, event_statuses, open_event_id, time_range))
        .collect()
}

pub(crate) fn rejected_cell(rejected: bool) -> String {
    if rejected { "True" } else { "False" }.to_string()
}
