//! Transfer station detection.

use std::collections::HashMap;

use crate::graph::RouteStopIndex;

/// A stop served by two or more routes.
///
/// `name` keeps the first-seen casing of the stop's display name, and
/// `lines` holds the long names of the serving routes in first-seen
/// order. Both are fully determined by the index they were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferStation {
    pub name: String,
    pub lines: Vec<String>,
}

impl TransferStation {
    /// The uppercase-normalized name this station is matched by.
    pub fn name_key(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Find every stop served by more than one route.
///
/// Stops are matched by uppercase-normalized name, not by id: platforms
/// that report the same name on different routes are one station. The
/// output follows first-seen order of stop names across the index; a
/// route that lists two platforms of the same station counts once.
pub fn find_transfer_stations(index: &RouteStopIndex) -> Vec<TransferStation> {
    // Reverse index from stop-name key to serving routes, with an
    // explicit key list so emission order never depends on map iteration.
    let mut order: Vec<String> = Vec::new();
    let mut by_stop: HashMap<String, TransferStation> = HashMap::new();

    for (route, stops) in index.iter() {
        for stop in stops {
            let key = stop.name_key();
            let entry = by_stop.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                TransferStation {
                    name: stop.name.clone(),
                    lines: Vec::new(),
                }
            });
            if !entry.lines.iter().any(|line| line == &route.long_name) {
                entry.lines.push(route.long_name.clone());
            }
        }
    }

    order
        .into_iter()
        .filter_map(|key| by_stop.remove(&key))
        .filter(|station| station.lines.len() >= 2)
        .collect()
}
