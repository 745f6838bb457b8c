//! MBTA subway information service.
//!
//! Answers structural questions about the subway network: which lines
//! exist, where they intersect, and how to travel between two stops
//! with the fewest line changes.

pub mod analysis;
pub mod domain;
pub mod error;
pub mod graph;
pub mod mbta;
pub mod planner;
pub mod summary;
