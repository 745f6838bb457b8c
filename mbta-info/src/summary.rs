//! Human-readable summaries of the subway network.
//!
//! The presentation layer: each operation fetches fresh data through a
//! [`TransitProvider`], runs the analysis, and renders plain text.
//! Nothing is cached across calls; every answer reflects a freshly
//! built index.

use tracing::debug;

use crate::analysis::{fewest_stops, find_transfer_stations, most_stops};
use crate::error::TransitError;
use crate::graph::{RouteStopIndex, TransitProvider};
use crate::planner::{Trip, find_trip};

/// High-level questions about the subway network.
pub struct SubwayInfo<P> {
    provider: P,
}

impl<P: TransitProvider> SubwayInfo<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The long name of every subway route, comma-separated.
    pub async fn route_names(&self) -> Result<String, TransitError> {
        let routes = self.provider.subway_routes().await?;
        Ok(routes
            .iter()
            .map(|route| route.long_name.as_str())
            .collect::<Vec<_>>()
            .join(", "))
    }

    /// Stop-count extremes and the full transfer-station listing.
    pub async fn aggregate_info(&self) -> Result<String, TransitError> {
        let index = self.fetch_index().await?;

        let most = most_stops(&index);
        let fewest = fewest_stops(&index);
        let mut lines = vec![
            format!(
                "The line with the most stops is {}, with {} stops.",
                most.name, most.stops
            ),
            format!(
                "The line with the fewest stops is {}, with {} stops.",
                fewest.name, fewest.stops
            ),
        ];

        for station in find_transfer_stations(&index) {
            lines.push(format!(
                " - {}, which services the following lines: {}",
                station.name,
                station.lines.join(", ")
            ));
        }

        Ok(lines.join("\n"))
    }

    /// A fewest-transfers trip between two stops, named or identified by
    /// id.
    pub async fn trip_summary(&self, start: &str, end: &str) -> Result<String, TransitError> {
        let index = self.fetch_index().await?;
        let transfers = find_transfer_stations(&index);
        let trip = find_trip(&index, &transfers, start, end)?;
        Ok(render_trip(&trip))
    }

    /// Fetch the subway routes and build a fresh index.
    async fn fetch_index(&self) -> Result<RouteStopIndex, TransitError> {
        let routes = self.provider.subway_routes().await?;
        debug!(routes = routes.len(), "building route-stop index");
        RouteStopIndex::build(&self.provider, routes).await
    }
}

/// Render a trip as an intro line plus one line per boarding.
fn render_trip(trip: &Trip) -> String {
    let steps = trip.steps();
    let start = steps.first().map(|s| s.stop.as_str()).unwrap_or_default();
    let end = steps.last().map(|s| s.stop.as_str()).unwrap_or_default();

    let mut lines = vec![format!("Here is a trip from {start} to {end}:")];
    for window in steps.windows(2) {
        let (from, to) = (&window[0], &window[1]);
        if let Some(line) = &from.line {
            lines.push(format!(" - Take the {} from {} to {}.", line, from.stop, to.stop));
        }
    }
    lines.join("\n")
}

/// Render an error the way every consuming operation reports it.
pub fn render_error(err: &TransitError) -> String {
    format!(
        "An error occurred with status code {}: {}",
        err.code(),
        err.message()
    )
}
