//! Transfer and aggregate analysis over the route ↔ stop index.
//!
//! Pure, synchronous computations: no fetching, no shared state, and no
//! caching across calls. Every function here is total over a valid
//! [`RouteStopIndex`](crate::graph::RouteStopIndex).

mod stats;
mod transfers;

pub use stats::{LineStopCount, fewest_stops, most_stops};
pub use transfers::{TransferStation, find_transfer_stations};
