//! Route ↔ stop association.
//!
//! Builds the in-memory index that the analysis and trip-planning layers
//! consume: every subway route paired with the ordered list of stops it
//! serves. The index is a pure function of the fetched data and is never
//! mutated after construction.

use std::collections::HashMap;

use futures::future::try_join_all;
use tracing::debug;

use crate::domain::{Route, RouteId, Stop};
use crate::error::TransitError;

/// Source of route and stop data.
///
/// This abstraction allows the graph builder and the summary layer to be
/// tested with mock data instead of live API responses.
#[allow(async_fn_in_trait)]
pub trait TransitProvider {
    /// Fetch the subway routes.
    async fn subway_routes(&self) -> Result<Vec<Route>, TransitError>;

    /// Fetch the ordered stops served by a route.
    async fn stops_on_route(&self, route: &RouteId) -> Result<Vec<Stop>, TransitError>;
}

/// Association from each route to the ordered stops it serves.
///
/// Routes keep their insertion order so derived output (transfer
/// stations, aggregate labels) is reproducible across runs. Routes are
/// looked up by their stable id, never by identity of the whole value.
#[derive(Debug, Clone, Default)]
pub struct RouteStopIndex {
    routes: Vec<Route>,
    stops_by_route: HashMap<RouteId, Vec<Stop>>,
}

impl RouteStopIndex {
    /// Build the index by fetching the stop list of every route.
    ///
    /// One fetch is issued per route, all of them concurrently; the
    /// first failure cancels the rest and surfaces its error unchanged.
    /// Routes with no stops are retained with an empty list.
    pub async fn build<P: TransitProvider>(
        provider: &P,
        routes: Vec<Route>,
    ) -> Result<Self, TransitError> {
        let fetches: Vec<_> = routes
            .iter()
            .map(|route| provider.stops_on_route(&route.id))
            .collect();
        let stop_lists = try_join_all(fetches).await?;
        debug!(routes = routes.len(), "fetched stop lists");

        Ok(Self::from_pairs(
            routes.into_iter().zip(stop_lists).collect(),
        ))
    }

    /// Build the index from already-fetched route/stop pairs.
    pub fn from_pairs(pairs: Vec<(Route, Vec<Stop>)>) -> Self {
        let mut routes = Vec::with_capacity(pairs.len());
        let mut stops_by_route = HashMap::with_capacity(pairs.len());

        for (route, stops) in pairs {
            stops_by_route.insert(route.id.clone(), stops);
            routes.push(route);
        }

        RouteStopIndex {
            routes,
            stops_by_route,
        }
    }

    /// The routes in insertion order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The ordered stops served by a route.
    pub fn stops(&self, route: &RouteId) -> &[Stop] {
        self.stops_by_route
            .get(route)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate `(route, stops)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Route, &[Stop])> {
        self.routes.iter().map(|route| (route, self.stops(&route.id)))
    }

    /// Number of routes in the index.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the index holds any routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
