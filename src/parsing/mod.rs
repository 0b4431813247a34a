//! Typed parsing of query payloads and fixture files.

pub mod event_status;
pub mod loaders;

pub use event_status::{parse_event_status_response, EventStatusResponse, ParseError};
pub use loaders::{
    load_events_from_file, load_events_from_str, load_signal_detections_from_file,
    load_signal_detections_from_str, load_station_soh_from_file, load_station_soh_from_str,
};
