//! Display-row derivation for the analyst tables.
//!
//! Rows are rebuilt wholesale from the current domain collections on every
//! pass; nothing here caches or mutates. Building is deterministic, so
//! identical inputs always produce structurally equal rows.
//!
//! # Modules
//!
//! - [`detection`]: signal-detections table rows
//! - [`event`]: events table rows
//! - [`filtering`]: external filter predicates and toggle state

pub mod detection;
pub mod event;
pub mod filtering;

pub use detection::{build_signal_detection_row, build_signal_detection_rows, SignalDetectionRow};
pub use event::{build_event_row, build_event_rows, EventRow};
pub use filtering::{
    detection_passes_filter, event_passes_filter, is_event_filter_present,
    is_external_filter_present, DetectionFilterState, EventFilterState,
};
