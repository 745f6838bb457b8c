//! BFS trip search over the reduced transfer graph.
//!
//! Modeling every stop as a search node is unnecessary: only points
//! where a line choice exists matter. The reduced graph therefore has
//! three kinds of nodes: the start stop, the end stop, and the transfer
//! stations. Two nodes are connected whenever some line serves both;
//! riding that line between them is one hop no matter how many
//! intermediate stops it passes, because non-transfer stops offer no
//! branching choice.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use crate::analysis::TransferStation;
use crate::domain::Stop;
use crate::error::TransitError;
use crate::graph::RouteStopIndex;

use super::trip::{Trip, TripStep};

/// A node in the reduced search graph.
#[derive(Debug, Clone)]
struct Node {
    /// Display name, first resolved casing.
    name: String,
    /// Uppercase name key; nodes are identified by name, not id.
    key: String,
    /// Long names of the lines serving this node.
    lines: Vec<String>,
}

/// How a node was first reached: board `line` at the stop named `from`.
#[derive(Debug, Clone)]
struct ParentEdge {
    from: String,
    line: String,
}

/// Find a minimum-transfer trip between two stops.
///
/// `start` and `end` are matched case-insensitively against stop names,
/// or exactly against stop ids. The returned trip has the fewest line
/// boardings over the given index; when several minimal trips exist, the
/// one returned follows the discovery order of `transfer_stations`.
///
/// Fails with a validation error when an endpoint cannot be resolved or
/// no path exists, and with an internal error when a resolved stop
/// cannot be attributed to any line (a data inconsistency).
pub fn find_trip(
    index: &RouteStopIndex,
    transfer_stations: &[TransferStation],
    start: &str,
    end: &str,
) -> Result<Trip, TransitError> {
    let start_stop = resolve_stop(index, start).ok_or_else(|| {
        TransitError::validation(format!("Starting stop {start} could not be found."))
    })?;
    let end_stop = resolve_stop(index, end).ok_or_else(|| {
        TransitError::validation(format!("Ending stop {end} could not be found."))
    })?;

    let start_key = start_stop.name_key();
    let end_key = end_stop.name_key();

    // Already there: a trip of just that stop, no boardings.
    if start_key == end_key {
        return Ok(Trip::new(vec![TripStep {
            stop: start_stop.name.clone(),
            line: None,
        }]));
    }

    let start_node = node_for(index, transfer_stations, start_stop)?;

    // The pool of undiscovered nodes: the end stop first, then every
    // transfer station in discovery order. Each node leaves the pool at
    // most once, which terminates the search and makes the first dequeue
    // of the end stop a minimum-boarding trip.
    let mut pool: Vec<Node> = Vec::with_capacity(transfer_stations.len() + 1);
    pool.push(node_for(index, transfer_stations, end_stop)?);
    for station in transfer_stations {
        let key = station.name_key();
        if key == start_key || key == end_key {
            continue;
        }
        pool.push(Node {
            name: station.name.clone(),
            key,
            lines: station.lines.clone(),
        });
    }

    let mut parents: HashMap<String, ParentEdge> = HashMap::new();
    let mut queue: VecDeque<Node> = VecDeque::new();
    queue.push_back(start_node);

    while let Some(node) = queue.pop_front() {
        if node.key == end_key {
            return reconstruct(&parents, &start_key, node);
        }

        for line in &node.lines {
            // Claim every undiscovered node this line reaches; riding
            // from here to any of them is a single hop.
            let mut rest = Vec::with_capacity(pool.len());
            for candidate in pool.drain(..) {
                if candidate.lines.iter().any(|l| l == line) {
                    trace!(
                        from = %node.name,
                        to = %candidate.name,
                        line = %line,
                        "discovered"
                    );
                    parents.insert(
                        candidate.key.clone(),
                        ParentEdge {
                            from: node.name.clone(),
                            line: line.clone(),
                        },
                    );
                    queue.push_back(candidate);
                } else {
                    rest.push(candidate);
                }
            }
            pool = rest;
        }
    }

    debug!(start = %start_stop.name, end = %end_stop.name, "queue exhausted without reaching end");
    Err(TransitError::validation(format!(
        "No subway path could be found from {} to {}.",
        start_stop.name, end_stop.name
    )))
}

/// Resolve a user-supplied identifier to a stop.
///
/// Matches case-insensitively on the display name, or exactly on the
/// stable id, scanning the index in insertion order; the first match
/// wins.
fn resolve_stop<'a>(index: &'a RouteStopIndex, input: &str) -> Option<&'a Stop> {
    let input_key = input.to_uppercase();
    index
        .iter()
        .flat_map(|(_, stops)| stops.iter())
        .find(|stop| stop.id.as_str() == input || stop.name_key() == input_key)
}

/// Build the search node for a stop.
///
/// The line-set is the stop's transfer-station route set when it is a
/// transfer station, otherwise the single route whose stop list contains
/// it. A stop served by no line at all is a data inconsistency.
fn node_for(
    index: &RouteStopIndex,
    transfer_stations: &[TransferStation],
    stop: &Stop,
) -> Result<Node, TransitError> {
    let key = stop.name_key();

    if let Some(station) = transfer_stations.iter().find(|t| t.name_key() == key) {
        return Ok(Node {
            name: station.name.clone(),
            key,
            lines: station.lines.clone(),
        });
    }

    let line = index
        .iter()
        .find_map(|(route, stops)| {
            stops
                .iter()
                .any(|s| s.name_key() == key)
                .then(|| route.long_name.clone())
        })
        .ok_or_else(|| {
            TransitError::internal(format!("Stop {} is not served by any line.", stop.name))
        })?;

    Ok(Node {
        name: stop.name.clone(),
        key,
        lines: vec![line],
    })
}

/// Rebuild the forward trip by following parent edges back from the end.
///
/// Each edge contributes the step "board `line` at `from`"; the end node
/// itself becomes the final, line-less step.
fn reconstruct(
    parents: &HashMap<String, ParentEdge>,
    start_key: &str,
    end: Node,
) -> Result<Trip, TransitError> {
    let mut steps = vec![TripStep {
        stop: end.name,
        line: None,
    }];

    let mut current = end.key;
    while current != start_key {
        let edge = parents.get(&current).ok_or_else(|| {
            TransitError::internal(format!("Stop {current} has no recorded predecessor."))
        })?;
        steps.push(TripStep {
            stop: edge.from.clone(),
            line: Some(edge.line.clone()),
        });
        current = edge.from.to_uppercase();
    }

    steps.reverse();
    Ok(Trip::new(steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::find_transfer_stations;
    use crate::domain::{Route, RouteId, RouteType, Stop, StopId};

    fn route(id: &str, name: &str) -> Route {
        Route::new(RouteId::new(id), name, RouteType::HeavyRail)
    }

    fn stop(id: &str, name: &str) -> Stop {
        Stop::new(StopId::new(id), name)
    }

    /// Red Line and Green Line E crossing at Park Street.
    fn crossing_index() -> RouteStopIndex {
        RouteStopIndex::from_pairs(vec![
            (
                route("Red", "Red Line"),
                vec![stop("place-pktrm", "Park Street"), stop("place-knncl", "Kendall/MIT")],
            ),
            (
                route("Green-E", "Green Line E"),
                vec![
                    stop("place-nuniv", "Northeastern University"),
                    stop("place-pktrm-g", "Park Street"),
                ],
            ),
        ])
    }

    /// Four lines in a chain: Mattapan - Red - Orange - Blue.
    fn chain_index() -> RouteStopIndex {
        RouteStopIndex::from_pairs(vec![
            (
                route("Mattapan", "Mattapan Trolley"),
                vec![stop("m1", "Mattapan"), stop("m2", "Ashmont")],
            ),
            (
                route("Red", "Red Line"),
                vec![stop("r1", "Ashmont"), stop("r2", "Downtown Crossing")],
            ),
            (
                route("Orange", "Orange Line"),
                vec![stop("o1", "Downtown Crossing"), stop("o2", "State")],
            ),
            (
                route("Blue", "Blue Line"),
                vec![stop("b1", "State"), stop("b2", "Wonderland")],
            ),
        ])
    }

    fn trip(index: &RouteStopIndex, start: &str, end: &str) -> Result<Trip, TransitError> {
        let transfers = find_transfer_stations(index);
        find_trip(index, &transfers, start, end)
    }

    #[test]
    fn one_transfer_trip() {
        let index = crossing_index();
        let found = trip(&index, "Northeastern University", "Kendall/MIT").unwrap();

        assert_eq!(
            found.steps(),
            [
                TripStep {
                    stop: "Northeastern University".to_string(),
                    line: Some("Green Line E".to_string()),
                },
                TripStep {
                    stop: "Park Street".to_string(),
                    line: Some("Red Line".to_string()),
                },
                TripStep {
                    stop: "Kendall/MIT".to_string(),
                    line: None,
                },
            ]
        );
    }

    #[test]
    fn same_line_trip_has_one_boarding() {
        let index = crossing_index();
        let found = trip(&index, "Park Street", "Kendall/MIT").unwrap();

        assert_eq!(found.boardings(), 1);
        assert_eq!(found.steps()[0].line.as_deref(), Some("Red Line"));
        assert_eq!(found.steps()[1].stop, "Kendall/MIT");
    }

    #[test]
    fn start_equals_end_yields_single_step() {
        let index = crossing_index();
        let found = trip(&index, "Park Street", "park street").unwrap();

        assert_eq!(
            found.steps(),
            [TripStep {
                stop: "Park Street".to_string(),
                line: None,
            }]
        );
    }

    #[test]
    fn chain_of_transfers() {
        let index = chain_index();
        let found = trip(&index, "Mattapan", "Wonderland").unwrap();

        assert_eq!(found.boardings(), 4);
        assert_eq!(found.steps().first().map(|s| s.stop.as_str()), Some("Mattapan"));
        assert_eq!(found.steps().last().map(|s| s.stop.as_str()), Some("Wonderland"));

        let lines: Vec<&str> = found
            .steps()
            .iter()
            .filter_map(|s| s.line.as_deref())
            .collect();
        assert_eq!(
            lines,
            ["Mattapan Trolley", "Red Line", "Orange Line", "Blue Line"]
        );
    }

    #[test]
    fn resolves_by_id_and_mixed_case_name() {
        let index = crossing_index();

        let by_name = trip(&index, "northeastern university", "KENDALL/MIT").unwrap();
        let by_id = trip(&index, "place-nuniv", "place-knncl").unwrap();
        assert_eq!(by_name, by_id);
    }

    #[test]
    fn unknown_start_is_a_validation_error() {
        let index = crossing_index();
        let err = trip(&index, "place-Downtown", "Kendall/MIT").unwrap_err();

        assert_eq!(
            err,
            TransitError::validation("Starting stop place-Downtown could not be found.")
        );
        assert_eq!(err.code(), 400);
    }

    #[test]
    fn unknown_end_is_a_validation_error() {
        let index = crossing_index();
        let err = trip(&index, "Park Street", "Stte").unwrap_err();

        assert_eq!(
            err,
            TransitError::validation("Ending stop Stte could not be found.")
        );
    }

    #[test]
    fn disconnected_stops_have_no_path() {
        let index = RouteStopIndex::from_pairs(vec![
            (
                route("Red", "Red Line"),
                vec![stop("r1", "Alewife"), stop("r2", "Davis")],
            ),
            (
                route("Blue", "Blue Line"),
                vec![stop("b1", "Wonderland"), stop("b2", "Revere Beach")],
            ),
        ]);

        let err = trip(&index, "Alewife", "Wonderland").unwrap_err();
        assert_eq!(err.code(), 400);
        assert_eq!(
            err.message(),
            "No subway path could be found from Alewife to Wonderland."
        );
    }

    #[test]
    fn minimum_boardings_beats_longer_route() {
        // Direct Red Line service plus a detour through two other lines;
        // BFS must return the single-boarding trip.
        let index = RouteStopIndex::from_pairs(vec![
            (
                route("Green-B", "Green Line B"),
                vec![stop("g1", "Park Street"), stop("g2", "Government Center")],
            ),
            (
                route("Blue", "Blue Line"),
                vec![stop("b1", "Government Center"), stop("b2", "Charles/MGH")],
            ),
            (
                route("Red", "Red Line"),
                vec![
                    stop("r1", "Park Street"),
                    stop("r2", "Charles/MGH"),
                    stop("r3", "Kendall/MIT"),
                ],
            ),
        ]);

        let found = trip(&index, "Park Street", "Charles/MGH").unwrap();
        assert_eq!(found.boardings(), 1);
        assert_eq!(found.steps()[0].line.as_deref(), Some("Red Line"));
    }

    #[test]
    fn transfer_station_endpoints_work() {
        let index = chain_index();

        let found = trip(&index, "Ashmont", "State").unwrap();
        assert_eq!(found.boardings(), 2);

        let lines: Vec<&str> = found
            .steps()
            .iter()
            .filter_map(|s| s.line.as_deref())
            .collect();
        assert_eq!(lines, ["Red Line", "Orange Line"]);
    }
}
