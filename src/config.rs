//! Display configuration file support.
//!
//! Deployments tune the initial filter toggles and the station-group
//! display order through a TOML file. The configuration is an explicit
//! value constructed by the caller and passed down to whatever needs it;
//! there is no process-global configuration state.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rows::filtering::{DetectionFilterState, EventFilterState};

/// Top-level display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub detection_filters: DetectionFilterState,
    pub event_filters: EventFilterState,
    pub station_groups: StationGroupSettings,
}

/// Station-group settings for the overview display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationGroupSettings {
    /// Group names in the order the overview should render them.
    pub display_order: Vec<String>,
}

impl DisplayConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse display configuration")
    }

    /// Loads a configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read display configuration: {}", path.display()))?;
        Self::from_toml_str(&content)
    }
}
