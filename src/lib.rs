//! Display derivation backend for seismic/infrasound analyst displays.
//!
//! Turns raw domain collections (events, signal detections, station
//! state-of-health) plus ambient display state (viewing interval, open
//! event, filter toggles) into flat table rows, capability rollup counts,
//! and per-row visibility decisions. Everything is synchronous and pure:
//! missing or invalid input produces sentinel values, never errors, and
//! identical inputs always derive identical output.

pub mod classification;
pub mod config;
pub mod formatting;
pub mod models;
pub mod parsing;
pub mod rollup;
pub mod rows;
