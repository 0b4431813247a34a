//! Typed parsing of the event-status query payload.
//!
//! The payload is a JSON object keyed by event id. Parsing yields an
//! explicit [`EventStatusResponse`]: either a resolved id-keyed lookup or
//! `NotFound` for null/empty payloads. Malformed payloads are reported as
//! typed errors carrying the failing path; there is no shape probing.

use std::collections::HashMap;

use log::warn;
use serde::Deserialize;

use crate::models::{EventStatus, EventStatusRecord};

/// Outcome of parsing an event-status query payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EventStatusResponse {
    /// Status records keyed by event id, ready for the row builders.
    Resolved(HashMap<String, EventStatusRecord>),
    /// The query answered with no status data (null or empty payload).
    NotFound,
}

impl EventStatusResponse {
    /// The resolved lookup, or an empty one for `NotFound`.
    ///
    /// Row builders treat missing entries as "status unknown", so an empty
    /// lookup is the correct reading of an absent payload.
    pub fn into_lookup(self) -> HashMap<String, EventStatusRecord> {
        match self {
            EventStatusResponse::Resolved(lookup) => lookup,
            EventStatusResponse::NotFound => HashMap::new(),
        }
    }
}

/// Error raised for a payload that does not match the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed event status payload at {path}: {message}")]
    Malformed { path: String, message: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEventStatusInfo {
    event_status: EventStatus,
    #[serde(default)]
    active_analyst_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEventStatusEntry {
    event_id: String,
    event_status_info: RawEventStatusInfo,
}

/// Parses an event-status query payload.
pub fn parse_event_status_response(json: &str) -> Result<EventStatusResponse, ParseError> {
    let trimmed = json.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(EventStatusResponse::NotFound);
    }

    let mut deserializer = serde_json::Deserializer::from_str(trimmed);
    let raw: HashMap<String, RawEventStatusEntry> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            ParseError::Malformed {
                path: err.path().to_string(),
                message: err.inner().to_string(),
            }
        })?;

    if raw.is_empty() {
        return Ok(EventStatusResponse::NotFound);
    }

    let mut lookup = HashMap::with_capacity(raw.len());
    for (event_id, entry) in raw {
        if entry.event_id != event_id {
            warn!(
                "event status keyed by {} names event {}; keeping the key",
                event_id, entry.event_id
            );
        }
        lookup.insert(
            event_id.clone(),
            EventStatusRecord {
                event_id,
                event_status: entry.event_status_info.event_status,
                active_analyst_ids: entry.event_status_info.active_analyst_ids,
            },
        );
    }
    Ok(EventStatusResponse::Resolved(lookup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_resolved_lookup() {
        let json = r#"{
            "ev-1": {
                "eventId": "ev-1",
                "eventStatusInfo": {
                    "eventStatus": "COMPLETE",
                    "activeAnalystIds": ["analyst-3"]
                }
            }
        }"#;
        let response = parse_event_status_response(json).unwrap();
        let lookup = response.into_lookup();
        let record = lookup.get("ev-1").unwrap();
        assert_eq!(record.event_status, EventStatus::Complete);
        assert_eq!(record.active_analyst_ids, vec!["analyst-3".to_string()]);
    }

    #[test]
    fn null_and_empty_payloads_are_not_found() {
        assert_eq!(
            parse_event_status_response("null").unwrap(),
            EventStatusResponse::NotFound
        );
        assert_eq!(
            parse_event_status_response("  ").unwrap(),
            EventStatusResponse::NotFound
        );
        assert_eq!(
            parse_event_status_response("{}").unwrap(),
            EventStatusResponse::NotFound
        );
        assert!(EventStatusResponse::NotFound.into_lookup().is_empty());
    }

    #[test]
    fn malformed_payload_reports_the_failing_path() {
        let json = r#"{
            "ev-1": {
                "eventId": "ev-1",
                "eventStatusInfo": { "eventStatus": "NOT_A_STATUS" }
            }
        }"#;
        let err = parse_event_status_response(json).unwrap_err();
        let ParseError::Malformed { path, .. } = err;
        assert!(path.contains("ev-1"), "unexpected path: {path}");
    }

    #[test]
    fn missing_analyst_list_defaults_to_empty() {
        let json = r#"{
            "ev-2": {
                "eventId": "ev-2",
                "eventStatusInfo": { "eventStatus": "IN_PROGRESS" }
            }
        }"#;
        let lookup = parse_event_status_response(json).unwrap().into_lookup();
        assert!(lookup.get("ev-2").unwrap().active_analyst_ids.is_empty());
    }
}
