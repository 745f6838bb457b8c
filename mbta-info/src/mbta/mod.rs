//! MBTA V3 API client.
//!
//! Async HTTP access to the MBTA's JSON:API endpoints, with conversion
//! into domain types. All analysis happens elsewhere; this module is
//! only concerned with fetching.

mod client;
mod types;

pub use client::{MbtaClient, MbtaConfig};
pub use types::{ApiError, RouteResource, RoutesResponse, StopResource, StopsResponse};
