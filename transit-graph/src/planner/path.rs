//! Path reconstruction shared by both searches.

use std::collections::HashMap;

use crate::domain::RouteResult;
use crate::graph::GraphStore;

/// Predecessor links recorded during a traversal: station -> previous station.
pub(super) type Predecessors<'a> = HashMap<&'a str, &'a str>;

/// Walk predecessor links back from `to` and build the route.
///
/// Distance and time are summed edge by edge along the reconstructed path,
/// whatever the search optimised for. Returns the unreachable sentinel
/// when the links never lead back to `from`.
pub(super) fn build_route(
    graph: &GraphStore,
    from: &str,
    to: &str,
    predecessors: &Predecessors<'_>,
) -> RouteResult {
    let mut ids = vec![to];
    let mut current = to;
    while current != from {
        match predecessors.get(current) {
            Some(&previous) => {
                ids.push(previous);
                current = previous;
            }
            None => return RouteResult::unreachable(),
        }
    }
    ids.reverse();

    let mut distance = 0.0;
    let mut time = 0.0;
    for pair in ids.windows(2) {
        let Some(connection) = graph.get_connection(pair[0], pair[1]) else {
            return RouteResult::unreachable();
        };
        distance += connection.distance;
        time += graph.travel_time(connection);
    }

    let path = ids
        .iter()
        .filter_map(|id| graph.get_station(id).cloned())
        .collect();
    RouteResult::found(path, distance, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::sample_graph;

    #[test]
    fn rebuilds_and_sums() {
        let g = sample_graph();
        let mut prev = Predecessors::new();
        prev.insert("B", "A");
        prev.insert("C", "B");

        let r = build_route(&g, "A", "C", &prev);
        assert_eq!(r.station_ids(), vec!["A", "B", "C"]);
        assert_eq!(r.distance, 25.0);
        assert_eq!(r.time, 25.0 / 40.0);
        assert_eq!(r.transfers, 2);
    }

    #[test]
    fn same_station_needs_no_links() {
        let g = sample_graph();
        let r = build_route(&g, "A", "A", &Predecessors::new());
        assert_eq!(r.station_ids(), vec!["A"]);
        assert_eq!(r.distance, 0.0);
        assert_eq!(r.time, 0.0);
        assert_eq!(r.transfers, 0);
    }

    #[test]
    fn missing_link_is_unreachable() {
        let g = sample_graph();
        let r = build_route(&g, "A", "C", &Predecessors::new());
        assert!(!r.is_found());
        assert_eq!(r.transfers, -1);
    }
}
