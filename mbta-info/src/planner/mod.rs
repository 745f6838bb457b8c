//! Minimum-transfer trip planner.
//!
//! This module implements the core trip-finding algorithm that answers:
//! "how do I get from this stop to that stop with the fewest line
//! changes?"
//!
//! The algorithm uses breadth-first search over a reduced graph whose
//! only nodes are the start stop, the end stop, and the transfer
//! stations; it optimizes strictly for the number of line boardings,
//! never for distance or duration.

mod search;
mod trip;

pub use search::find_trip;
pub use trip::{Trip, TripStep};
