//! Station state-of-health models and rollup counts.

use serde::{Deserialize, Serialize};

/// Summary state of a station or capability, worst to best plus absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SohStatusSummary {
    Good,
    Marginal,
    Bad,
    None,
}

impl SohStatusSummary {
    pub fn as_str(&self) -> &'static str {
        match self {
            SohStatusSummary::Good => "GOOD",
            SohStatusSummary::Marginal => "MARGINAL",
            SohStatusSummary::Bad => "BAD",
            SohStatusSummary::None => "NONE",
        }
    }
}

/// A station's capability status with respect to one station group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationGroupCapability {
    pub group_name: String,
    pub station_capability: SohStatusSummary,
}

/// Per-station state-of-health as delivered by the monitoring feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSoh {
    pub station_name: String,
    pub soh_status_summary: SohStatusSummary,
    #[serde(default)]
    pub station_groups: Vec<StationGroupCapability>,
}

/// Group-level capability status, one entry per configured station group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationGroupSohStatus {
    pub station_group_name: String,
    pub group_capability_status: SohStatusSummary,
}

/// Rollup counts shown in a station-group header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub has_capability_rollup: bool,
    pub bad_count: usize,
    pub marginal_count: usize,
    pub ok_count: usize,
}

impl StatusCounts {
    /// Total number of stations participating in the rollup.
    pub fn total(&self) -> usize {
        self.bad_count + self.marginal_count + self.ok_count
    }
}
