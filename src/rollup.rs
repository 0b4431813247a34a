//! Station-group capability rollups for the overview display.
//!
//! A station participates in a group's rollup only when it carries a
//! capability status for that group; stations without one (capability
//! `NONE`) are excluded before tallying. Aggregation is pure and does not
//! depend on input order.

use crate::models::{SohStatusSummary, StationGroupSohStatus, StationSoh, StatusCounts};

/// Looks up a group's own capability status, defaulting to `NONE` when the
/// group is not present.
pub fn group_capability(
    station_groups: &[StationGroupSohStatus],
    group_name: &str,
) -> SohStatusSummary {
    station_groups
        .iter()
        .find(|group| group.station_group_name == group_name)
        .map(|group| group.group_capability_status)
        .unwrap_or(SohStatusSummary::None)
}

/// Looks up a station's capability status with respect to one group,
/// defaulting to `NONE` when the station is not in the group.
pub fn station_capability(station: &StationSoh, group_name: &str) -> SohStatusSummary {
    station
        .station_groups
        .iter()
        .find(|group| group.group_name == group_name)
        .map(|group| group.station_capability)
        .unwrap_or(SohStatusSummary::None)
}

/// Tallies the stations participating in a group's capability rollup.
///
/// `has_capability_rollup` is true iff at least one station carries a
/// non-`NONE` capability for the group, which is exactly when the three
/// counts sum to a positive number.
pub fn aggregate_status_counts(group_name: &str, stations: &[StationSoh]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for station in stations {
        match station_capability(station, group_name) {
            SohStatusSummary::Bad => counts.bad_count += 1,
            SohStatusSummary::Marginal => counts.marginal_count += 1,
            SohStatusSummary::Good => counts.ok_count += 1,
            SohStatusSummary::None => {}
        }
    }
    counts.has_capability_rollup = counts.total() > 0;
    counts
}
