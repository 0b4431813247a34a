//! JSON loaders for the domain collections.
//!
//! These exist for fixtures, replayed query captures, and offline analysis;
//! the live application hands collections to the row builders directly.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;

use crate::models::{Event, SignalDetection, StationSoh};

fn parse_collection<T: DeserializeOwned>(json: &str, what: &str) -> Result<Vec<T>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer)
        .with_context(|| format!("failed to parse {what} JSON"))
}

/// Parses an events collection from a JSON array.
pub fn load_events_from_str(json: &str) -> Result<Vec<Event>> {
    let events: Vec<Event> = parse_collection(json, "events")?;
    info!("loaded {} events", events.len());
    Ok(events)
}

/// Loads an events collection from a JSON file.
pub fn load_events_from_file(path: &Path) -> Result<Vec<Event>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read events file: {}", path.display()))?;
    load_events_from_str(&json)
}

/// Parses a signal-detections collection from a JSON array.
pub fn load_signal_detections_from_str(json: &str) -> Result<Vec<SignalDetection>> {
    let detections: Vec<SignalDetection> = parse_collection(json, "signal detections")?;
    info!("loaded {} signal detections", detections.len());
    Ok(detections)
}

/// Loads a signal-detections collection from a JSON file.
pub fn load_signal_detections_from_file(path: &Path) -> Result<Vec<SignalDetection>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read signal detections file: {}", path.display()))?;
    load_signal_detections_from_str(&json)
}

/// Parses a station state-of-health collection from a JSON array.
pub fn load_station_soh_from_str(json: &str) -> Result<Vec<StationSoh>> {
    let stations: Vec<StationSoh> = parse_collection(json, "station SOH")?;
    info!("loaded SOH for {} stations", stations.len());
    Ok(stations)
}

/// Loads a station state-of-health collection from a JSON file.
pub fn load_station_soh_from_file(path: &Path) -> Result<Vec<StationSoh>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read station SOH file: {}", path.display()))?;
    load_station_soh_from_str(&json)
}
