//! Aggregate route statistics.

use crate::graph::RouteStopIndex;

/// A route long-name paired with its stop count.
///
/// Ties produce a single record whose `name` joins every tied route with
/// `", "`; callers treat the label as flat display text, not structured
/// data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStopCount {
    pub name: String,
    pub stops: usize,
}

/// The route serving the most stops.
///
/// An empty index yields an empty name and zero stops.
pub fn most_stops(index: &RouteStopIndex) -> LineStopCount {
    extreme(index, |candidate, current| candidate > current)
}

/// The route serving the fewest stops.
///
/// An empty index yields an empty name and zero stops.
pub fn fewest_stops(index: &RouteStopIndex) -> LineStopCount {
    extreme(index, |candidate, current| candidate < current)
}

/// Single pass over the routes tracking a running extreme.
///
/// The first route seeds the record unconditionally; a strict win
/// replaces it; an exact tie appends the route's name to the label.
fn extreme(index: &RouteStopIndex, better: impl Fn(usize, usize) -> bool) -> LineStopCount {
    let mut result: Option<LineStopCount> = None;

    for (route, stops) in index.iter() {
        let count = stops.len();
        match &mut result {
            None => {
                result = Some(LineStopCount {
                    name: route.long_name.clone(),
                    stops: count,
                });
            }
            Some(current) if better(count, current.stops) => {
                current.name.clone_from(&route.long_name);
                current.stops = count;
            }
            Some(current) if count == current.stops => {
                current.name.push_str(", ");
                current.name.push_str(&route.long_name);
            }
            Some(_) => {}
        }
    }

    result.unwrap_or_else(|| LineStopCount {
        name: String::new(),
        stops: 0,
    })
}
