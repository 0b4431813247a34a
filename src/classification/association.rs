//! Association status of signal detections relative to events.
//!
//! A detection is associated to an event when one of the event's hypotheses
//! claims the detection's id. Status resolution follows a fixed precedence:
//! association to the open event wins, then association to a completed
//! event, then association to any other event, else unassociated. Event
//! statuses come from an id-keyed lookup; a missing entry means "status
//! unknown", which blocks the completed classification but not the others.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Event, EventHypothesis, EventStatus, EventStatusRecord, SignalDetection};

/// How a detection relates to the currently known events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssociationStatus {
    OpenAssociated,
    CompleteAssociated,
    OtherAssociated,
    Unassociated,
}

impl AssociationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssociationStatus::OpenAssociated => "OPEN_ASSOCIATED",
            AssociationStatus::CompleteAssociated => "COMPLETE_ASSOCIATED",
            AssociationStatus::OtherAssociated => "OTHER_ASSOCIATED",
            AssociationStatus::Unassociated => "UNASSOCIATED",
        }
    }
}

/// Collects every event hypothesis, across all events, that claims the
/// detection.
pub fn find_event_hypotheses_for_detection<'a>(
    detection: &SignalDetection,
    events: &'a [Event],
) -> Vec<&'a EventHypothesis> {
    if detection.hypotheses.is_empty() {
        return Vec::new();
    }
    events
        .iter()
        .flat_map(|event| event.event_hypotheses.iter())
        .filter(|hypothesis| {
            hypothesis
                .associated_signal_detection_ids
                .iter()
                .any(|id| id == &detection.id)
        })
        .collect()
}

/// True when a non-rejected hypothesis of the open event claims the
/// detection.
pub fn is_open_associated(
    detection: &SignalDetection,
    events: &[Event],
    open_event_id: Option<&str>,
) -> bool {
    let Some(open_event_id) = open_event_id.filter(|id| !id.is_empty()) else {
        return false;
    };
    find_event_hypotheses_for_detection(detection, events)
        .iter()
        .any(|hypothesis| hypothesis.id.event_id == open_event_id && !hypothesis.rejected)
}

/// True when the detection is associated to an event whose looked-up status
/// is complete.
pub fn is_complete_associated(
    detection: &SignalDetection,
    events: &[Event],
    event_statuses: &HashMap<String, EventStatusRecord>,
) -> bool {
    let associated_event_ids: Vec<&str> = find_event_hypotheses_for_detection(detection, events)
        .iter()
        .map(|hypothesis| hypothesis.id.event_id.as_str())
        .collect();
    events.iter().any(|event| {
        associated_event_ids.iter().any(|id| *id == event.id)
            && event_statuses
                .get(&event.id)
                .is_some_and(|record| record.event_status == EventStatus::Complete)
    })
}

/// True when a non-rejected hypothesis of some event other than the open
/// one claims the detection.
pub fn is_other_associated(
    detection: &SignalDetection,
    events: &[Event],
    open_event_id: Option<&str>,
) -> bool {
    find_event_hypotheses_for_detection(detection, events)
        .iter()
        .any(|hypothesis| {
            Some(hypothesis.id.event_id.as_str()) != open_event_id && !hypothesis.rejected
        })
}

/// Distinct ids of events whose non-rejected hypotheses claim the detection.
pub fn associated_event_ids(detection: &SignalDetection, events: &[Event]) -> Vec<String> {
    let mut ids: Vec<String> = find_event_hypotheses_for_detection(detection, events)
        .iter()
        .filter(|hypothesis| !hypothesis.rejected)
        .map(|hypothesis| hypothesis.id.event_id.clone())
        .collect();
    ids.sort();
    ids.dedup();
    ids
}

/// True when non-rejected hypotheses of two or more distinct events claim
/// the detection.
pub fn has_association_conflict(detection: &SignalDetection, events: &[Event]) -> bool {
    associated_event_ids(detection, events).len() > 1
}

/// Resolves a detection's association status against the known events.
///
/// Precedence is fixed: open association wins over a simultaneous completed
/// classification, which wins over any other association.
pub fn association_status(
    detection: &SignalDetection,
    events: &[Event],
    open_event_id: Option<&str>,
    event_statuses: &HashMap<String, EventStatusRecord>,
) -> AssociationStatus {
    if is_open_associated(detection, events, open_event_id) {
        return AssociationStatus::OpenAssociated;
    }
    if is_complete_associated(detection, events, event_statuses) {
        return AssociationStatus::CompleteAssociated;
    }
    if is_other_associated(detection, events, open_event_id) {
        return AssociationStatus::OtherAssociated;
    }
    AssociationStatus::Unassociated
}
