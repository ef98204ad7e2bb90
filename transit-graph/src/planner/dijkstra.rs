//! Weighted shortest path (Dijkstra).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::domain::{Connection, RouteResult};
use crate::graph::GraphStore;

use super::path::{Predecessors, build_route};

/// Which connection attribute a weighted search minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    /// Physical distance.
    Distance,
    /// Travel time: the stored time, or distance over the default speed.
    Time,
}

impl Weight {
    fn of(self, graph: &GraphStore, connection: &Connection) -> f64 {
        match self {
            Weight::Distance => connection.distance,
            Weight::Time => graph.travel_time(connection),
        }
    }
}

/// Frontier entry. Ordered so that `BinaryHeap` pops the lowest cost
/// first, and among equal costs the entry discovered first.
#[derive(Debug)]
struct Frontier<'a> {
    cost: f64,
    seq: u64,
    station: &'a str,
}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier<'_> {}

/// Run Dijkstra from `from` until `to` is settled.
///
/// Both stations must exist. Returns the unreachable sentinel when the
/// frontier runs dry first.
pub(super) fn shortest_path<'a>(
    graph: &'a GraphStore,
    from: &'a str,
    to: &'a str,
    weight: Weight,
) -> RouteResult {
    let mut best: HashMap<&str, f64> = HashMap::new();
    let mut predecessors = Predecessors::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    let mut settled = 0usize;
    let mut reached = false;

    best.insert(from, 0.0);
    frontier.push(Frontier {
        cost: 0.0,
        seq,
        station: from,
    });

    while let Some(Frontier { cost, station, .. }) = frontier.pop() {
        // Stale entry superseded by a cheaper one pushed later
        if cost > best.get(station).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        settled += 1;

        if station == to {
            reached = true;
            break;
        }

        let Some(node) = graph.get_station(station) else {
            continue;
        };

        for connection in node.connections() {
            let next = connection.to_id.as_str();
            let candidate = cost + weight.of(graph, connection);
            // A first visit always counts, even when the sum overflowed to infinity
            if best.get(next).is_none_or(|&known| candidate < known) {
                trace!(from = station, to = next, cost = candidate, "Relaxed");
                best.insert(next, candidate);
                predecessors.insert(next, station);
                seq += 1;
                frontier.push(Frontier {
                    cost: candidate,
                    seq,
                    station: next,
                });
            }
        }
    }

    debug!(from, to, ?weight, settled, reached, "Dijkstra complete");

    if reached {
        build_route(graph, from, to, &predecessors)
    } else {
        RouteResult::unreachable()
    }
}
