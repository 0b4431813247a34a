//! Property tests for the classification and rollup invariants.

use proptest::prelude::*;

use sia_rust::classification::{classify_edge, EdgeType};
use sia_rust::formatting::{numeric_string_comparator, INVALID_CELL_TEXT};
use sia_rust::models::{
    SohStatusSummary, StationGroupCapability, StationSoh, TimeRange,
};
use sia_rust::rollup::aggregate_status_counts;

fn optional_f64() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), any::<f64>().prop_map(Some)]
}

fn optional_time_range() -> impl Strategy<Value = Option<TimeRange>> {
    prop_oneof![
        Just(None),
        (optional_f64(), optional_f64()).prop_map(|(start, end)| Some(TimeRange {
            start_time_secs: start,
            end_time_secs: end,
        })),
    ]
}

fn capability() -> impl Strategy<Value = SohStatusSummary> {
    prop_oneof![
        Just(SohStatusSummary::Good),
        Just(SohStatusSummary::Marginal),
        Just(SohStatusSummary::Bad),
        Just(SohStatusSummary::None),
    ]
}

fn stations() -> impl Strategy<Value = Vec<StationSoh>> {
    prop::collection::vec(
        (capability(), proptest::bool::ANY).prop_map(|(station_capability, in_group)| {
            StationSoh {
                station_name: "station".to_string(),
                soh_status_summary: SohStatusSummary::Good,
                station_groups: if in_group {
                    vec![StationGroupCapability {
                        group_name: "Primary".to_string(),
                        station_capability,
                    }]
                } else {
                    vec![]
                },
            }
        }),
        0..32,
    )
}

proptest! {
    #[test]
    fn classifier_is_total(range in optional_time_range(), timestamp in optional_f64()) {
        let result = classify_edge(range.as_ref(), timestamp);
        prop_assert!(matches!(
            result,
            EdgeType::Before | EdgeType::After | EdgeType::Interval | EdgeType::Invalid
        ));
    }

    #[test]
    fn well_formed_ranges_classify_boundaries_inclusively(
        start in -1.0e9f64..1.0e9,
        length in 0.0f64..1.0e6,
    ) {
        let range = TimeRange::new(start, start + length);
        prop_assert_eq!(classify_edge(Some(&range), Some(start)), EdgeType::Interval);
        prop_assert_eq!(
            classify_edge(Some(&range), Some(start + length)),
            EdgeType::Interval
        );
    }

    #[test]
    fn rollup_counts_are_bounded_and_consistent(stations in stations()) {
        let counts = aggregate_status_counts("Primary", &stations);
        let participating = stations
            .iter()
            .filter(|station| {
                sia_rust::rollup::station_capability(station, "Primary") != SohStatusSummary::None
            })
            .count();

        prop_assert!(counts.total() <= stations.len());
        prop_assert_eq!(counts.total(), participating);
        prop_assert_eq!(counts.has_capability_rollup, counts.total() > 0);
    }

    #[test]
    fn rollup_is_order_independent(stations in stations()) {
        let forward = aggregate_status_counts("Primary", &stations);
        let mut reversed = stations.clone();
        reversed.reverse();
        prop_assert_eq!(forward, aggregate_status_counts("Primary", &reversed));
    }

    #[test]
    fn comparator_ranks_unknown_below_any_number(value in any::<f64>()) {
        prop_assume!(value.is_finite());
        let formatted = format!("{value}");
        prop_assert_eq!(
            numeric_string_comparator(Some(INVALID_CELL_TEXT), Some(&formatted)),
            std::cmp::Ordering::Less
        );
        prop_assert_eq!(
            numeric_string_comparator(Some(&formatted), Some(INVALID_CELL_TEXT)),
            std::cmp::Ordering::Greater
        );
    }
}
