//! File-backed loader and configuration tests.

use std::io::Write;

use sia_rust::config::DisplayConfig;
use sia_rust::models::EventStatus;
use sia_rust::parsing::{
    load_events_from_file, load_signal_detections_from_str, parse_event_status_response,
    EventStatusResponse,
};

#[test]
fn loads_events_from_a_file() {
    let json = r#"[
        {
            "id": "ev-1",
            "rejected": false,
            "eventHypotheses": [
                {
                    "id": { "eventId": "ev-1", "hypothesisId": "ev-1-h1" },
                    "rejected": false,
                    "associatedSignalDetectionIds": ["sd-1"],
                    "location": {
                        "timeSecs": 6100.0,
                        "latitudeDegrees": -19.9,
                        "longitudeDegrees": 134.3,
                        "depthKm": 10.0
                    },
                    "magnitudeMb": 4.1,
                    "magnitudeMs": null,
                    "confidence": 0.82
                }
            ]
        }
    ]"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let events = load_events_from_file(file.path()).unwrap();
    assert_eq!(events.len(), 1);
    let hypothesis = events[0].current_hypothesis().unwrap();
    assert_eq!(hypothesis.magnitude_mb, Some(4.1));
    assert_eq!(
        hypothesis.associated_signal_detection_ids,
        vec!["sd-1".to_string()]
    );
}

#[test]
fn missing_file_reports_the_path() {
    let err = load_events_from_file(std::path::Path::new("/nonexistent/events.json")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/events.json"));
}

#[test]
fn defaulted_fields_round_trip_through_the_loader() {
    let detections =
        load_signal_detections_from_str(r#"[{ "id": "sd-1", "stationName": "ASAR" }]"#).unwrap();
    assert!(detections[0].hypotheses.is_empty());
    assert!(detections[0].current_hypothesis().is_none());
}

#[test]
fn event_status_payload_resolves_against_loaded_events() {
    let response = parse_event_status_response(
        r#"{
            "ev-1": {
                "eventId": "ev-1",
                "eventStatusInfo": {
                    "eventStatus": "COMPLETE",
                    "activeAnalystIds": ["analyst-1", "analyst-2"]
                }
            }
        }"#,
    )
    .unwrap();
    let EventStatusResponse::Resolved(lookup) = response else {
        panic!("expected a resolved lookup");
    };
    assert_eq!(lookup["ev-1"].event_status, EventStatus::Complete);
    assert_eq!(lookup["ev-1"].active_analyst_ids.len(), 2);
}

#[test]
fn loads_display_config_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
        [detection_filters]
        unassociated = false

        [event_filters]
        afterInterval = false

        [station_groups]
        display_order = ["Primary"]
        "#,
    )
    .unwrap();

    let config = DisplayConfig::load_from_file(file.path()).unwrap();
    assert!(!config.detection_filters.unassociated);
    assert!(config.detection_filters.before_interval);
    assert!(!config.event_filters.after_interval);
    assert_eq!(config.station_groups.display_order, vec!["Primary".to_string()]);
}
