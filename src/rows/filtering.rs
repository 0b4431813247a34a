//! External filter predicates for the display tables.
//!
//! The grid consults these once per row whenever the filter toggles change.
//! Every toggle defaults to on, and toggles missing from a deserialized
//! state also default to on, so rows only disappear when a user explicitly
//! turns their category off.

use serde::{Deserialize, Serialize};

use crate::classification::{AssociationStatus, EdgeType};
use crate::rows::detection::SignalDetectionRow;
use crate::rows::event::EventRow;

/// Visibility toggles for the signal-detections table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectionFilterState {
    pub before_interval: bool,
    pub after_interval: bool,
    pub associated_to_open_event: bool,
    pub associated_to_completed_event: bool,
    pub associated_to_other_event: bool,
    pub unassociated: bool,
}

impl Default for DetectionFilterState {
    fn default() -> Self {
        Self {
            before_interval: true,
            after_interval: true,
            associated_to_open_event: true,
            associated_to_completed_event: true,
            associated_to_other_event: true,
            unassociated: true,
        }
    }
}

/// Visibility toggles for the events table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventFilterState {
    pub before_interval: bool,
    pub after_interval: bool,
}

impl Default for EventFilterState {
    fn default() -> Self {
        Self {
            before_interval: true,
            after_interval: true,
        }
    }
}

/// True when any detection toggle is off, i.e. the grid must filter.
pub fn is_external_filter_present(state: &DetectionFilterState) -> bool {
    !(state.before_interval
        && state.after_interval
        && state.associated_to_open_event
        && state.associated_to_completed_event
        && state.associated_to_other_event
        && state.unassociated)
}

/// True when any event toggle is off.
pub fn is_event_filter_present(state: &EventFilterState) -> bool {
    !(state.before_interval && state.after_interval)
}

/// Decides whether a detection row stays visible under the given toggles.
///
/// Edge gating applies first; rows with an invalid edge classification are
/// not edge-gated. Association gating then maps each status to its toggle.
pub fn detection_passes_filter(row: &SignalDetectionRow, state: &DetectionFilterState) -> bool {
    if !state.after_interval && row.edge_type == EdgeType::After {
        return false;
    }
    if !state.before_interval && row.edge_type == EdgeType::Before {
        return false;
    }
    match row.assoc_status {
        AssociationStatus::CompleteAssociated => state.associated_to_completed_event,
        AssociationStatus::OpenAssociated => state.associated_to_open_event,
        AssociationStatus::OtherAssociated => state.associated_to_other_event,
        AssociationStatus::Unassociated => state.unassociated,
    }
}

/// Decides whether an event row stays visible under the given toggles.
pub fn event_passes_filter(row: &EventRow, state: &EventFilterState) -> bool {
    if !state.after_interval && row.edge_event_type == EdgeType::After {
        return false;
    }
    if !state.before_interval && row.edge_event_type == EdgeType::Before {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::models::{FeatureMeasurements, SignalDetection, SignalDetectionHypothesis, TimeRange};
    use crate::rows::detection::build_signal_detection_row;

    fn row_with(arrival_time_secs: f64) -> SignalDetectionRow {
        let sd = SignalDetection {
            id: "sd-1".to_string(),
            station_name: "ASAR".to_string(),
            hypotheses: vec![SignalDetectionHypothesis {
                id: "sd-1-h1".to_string(),
                rejected: false,
                feature_measurements: FeatureMeasurements {
                    arrival_time_secs: Some(arrival_time_secs),
                    ..FeatureMeasurements::default()
                },
            }],
        };
        let range = TimeRange::new(6000.0, 7000.0);
        build_signal_detection_row(&sd, &[], &HashMap::new(), None, Some(&range))
    }

    #[test]
    fn default_state_passes_everything() {
        let state = DetectionFilterState::default();
        assert!(!is_external_filter_present(&state));
        assert!(detection_passes_filter(&row_with(5000.0), &state));
        assert!(detection_passes_filter(&row_with(6500.0), &state));
        assert!(detection_passes_filter(&row_with(9000.0), &state));
    }

    #[test]
    fn edge_gating_hides_before_and_after_rows() {
        let state = DetectionFilterState {
            before_interval: false,
            after_interval: false,
            ..DetectionFilterState::default()
        };
        assert!(is_external_filter_present(&state));
        assert!(!detection_passes_filter(&row_with(5000.0), &state));
        assert!(!detection_passes_filter(&row_with(9000.0), &state));
        assert!(detection_passes_filter(&row_with(6500.0), &state));
    }

    #[test]
    fn association_gating_follows_the_status_toggle() {
        let state = DetectionFilterState {
            unassociated: false,
            ..DetectionFilterState::default()
        };
        // The fixture row is unassociated, so it is hidden.
        assert!(!detection_passes_filter(&row_with(6500.0), &state));
    }

    #[test]
    fn partial_toggle_state_defaults_missing_entries_to_visible() {
        // Only one toggle present; everything else stays on.
        let state: DetectionFilterState =
            serde_json::from_str(r#"{ "afterInterval": false }"#).unwrap();
        assert!(state.before_interval);
        assert!(state.unassociated);
        assert!(!state.after_interval);
        assert!(detection_passes_filter(&row_with(6500.0), &state));
        assert!(!detection_passes_filter(&row_with(9000.0), &state));

        let empty: DetectionFilterState = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, DetectionFilterState::default());
    }
}
