//! Domain types for the subway information service.
//!
//! These represent routes and stops as fetched from the MBTA. They are
//! immutable once constructed; all derived data (transfer stations,
//! aggregate statistics, trips) is recomputed from them per request.

mod route;
mod stop;

pub use route::{Route, RouteId, RouteType};
pub use stop::{Stop, StopId};
