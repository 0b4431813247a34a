//! Display classification of events and signal detections.
//!
//! # Components
//!
//! - [`edge`]: placement of timestamps relative to the open viewing interval
//! - [`association`]: association status of detections relative to events

pub mod association;
pub mod edge;

pub use association::{
    associated_event_ids, association_status, find_event_hypotheses_for_detection,
    has_association_conflict, is_complete_associated, is_open_associated, is_other_associated,
    AssociationStatus,
};
pub use edge::{classify_edge, EdgeType};
