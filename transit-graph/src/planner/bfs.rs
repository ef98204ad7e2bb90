//! Fewest-transfers search (breadth-first).
//!
//! Every connection counts as one hop regardless of its length. The first
//! time the destination is dequeued the search stops; the reported
//! distance and time are still the real sums along the chosen hops.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::RouteResult;
use crate::graph::GraphStore;

use super::path::{Predecessors, build_route};

/// Run BFS from `from` until `to` is dequeued.
///
/// Both stations must exist. Neighbours are explored in id order, so among
/// routes with the same hop count the result is deterministic.
pub(super) fn fewest_hops<'a>(graph: &'a GraphStore, from: &'a str, to: &'a str) -> RouteResult {
    let mut visited: HashSet<&str> = HashSet::from([from]);
    let mut predecessors = Predecessors::new();
    let mut queue: VecDeque<&str> = VecDeque::from([from]);
    let mut explored = 0usize;
    let mut reached = false;

    while let Some(station) = queue.pop_front() {
        explored += 1;

        if station == to {
            reached = true;
            break;
        }

        let Some(node) = graph.get_station(station) else {
            continue;
        };

        for connection in node.connections() {
            let next = connection.to_id.as_str();
            if visited.insert(next) {
                trace!(from = station, to = next, "BFS discovered station");
                predecessors.insert(next, station);
                queue.push_back(next);
            }
        }
    }

    debug!(from, to, explored, reached, "BFS complete");

    if reached {
        build_route(graph, from, to, &predecessors)
    } else {
        RouteResult::unreachable()
    }
}
