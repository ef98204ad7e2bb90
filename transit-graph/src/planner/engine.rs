//! Route engine: the public face of both searches.

use crate::domain::{GraphError, RouteResult};
use crate::graph::GraphStore;

use super::bfs::fewest_hops;
use super::criterion::Criterion;
use super::dijkstra::{Weight, shortest_path};

/// Results for the same origin and destination under every criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteComparison {
    pub by_distance: RouteResult,
    pub by_time: RouteResult,
    pub by_transfers: RouteResult,
}

impl RouteComparison {
    /// The result for one criterion.
    pub fn get(&self, criterion: Criterion) -> &RouteResult {
        match criterion {
            Criterion::Distance => &self.by_distance,
            Criterion::Time => &self.by_time,
            Criterion::Transfers => &self.by_transfers,
        }
    }
}

/// Answers route queries over a borrowed graph store.
///
/// The engine never mutates the store and keeps no state between
/// queries. Holding it borrows the store, so the graph cannot change
/// while a query runs.
///
/// Unknown station ids give `Err(GraphError::NotFound)`. A query between
/// existing but disconnected stations succeeds with the unreachable
/// sentinel (empty path, `transfers == -1`).
///
/// # Examples
///
/// ```
/// use transit_graph::graph::GraphStore;
/// use transit_graph::planner::{Criterion, RouteEngine};
///
/// let mut graph = GraphStore::new();
/// for id in ["A", "B", "C"] {
///     graph.add_station(id, id).unwrap();
/// }
/// graph.add_connection("A", "B", 10.0).unwrap();
/// graph.add_connection("B", "C", 15.0).unwrap();
///
/// let engine = RouteEngine::new(&graph);
/// let route = engine.route("A", "C", Criterion::Distance).unwrap();
/// assert_eq!(route.distance, 25.0);
/// assert_eq!(route.transfers, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteEngine<'a> {
    graph: &'a GraphStore,
}

impl<'a> RouteEngine<'a> {
    /// Create an engine over a graph store.
    pub fn new(graph: &'a GraphStore) -> Self {
        Self { graph }
    }

    /// Route minimising the sum of the given connection weight.
    pub fn shortest_by(
        &self,
        from: &str,
        to: &str,
        weight: Weight,
    ) -> Result<RouteResult, GraphError> {
        self.check_endpoints(from, to)?;
        Ok(shortest_path(self.graph, from, to, weight))
    }

    /// Route minimising total distance.
    pub fn shortest_by_distance(&self, from: &str, to: &str) -> Result<RouteResult, GraphError> {
        self.shortest_by(from, to, Weight::Distance)
    }

    /// Route minimising total travel time.
    pub fn shortest_by_time(&self, from: &str, to: &str) -> Result<RouteResult, GraphError> {
        self.shortest_by(from, to, Weight::Time)
    }

    /// Route with the fewest hops.
    pub fn fewest_transfers(&self, from: &str, to: &str) -> Result<RouteResult, GraphError> {
        self.check_endpoints(from, to)?;
        Ok(fewest_hops(self.graph, from, to))
    }

    /// Route under the given criterion.
    pub fn route(
        &self,
        from: &str,
        to: &str,
        criterion: Criterion,
    ) -> Result<RouteResult, GraphError> {
        match criterion {
            Criterion::Distance => self.shortest_by_distance(from, to),
            Criterion::Time => self.shortest_by_time(from, to),
            Criterion::Transfers => self.fewest_transfers(from, to),
        }
    }

    /// Run every criterion for the same pair of stations.
    pub fn compare(&self, from: &str, to: &str) -> Result<RouteComparison, GraphError> {
        Ok(RouteComparison {
            by_distance: self.shortest_by_distance(from, to)?,
            by_time: self.shortest_by_time(from, to)?,
            by_transfers: self.fewest_transfers(from, to)?,
        })
    }

    fn check_endpoints(&self, from: &str, to: &str) -> Result<(), GraphError> {
        for id in [from, to] {
            if !self.graph.contains_station(id) {
                return Err(GraphError::NotFound(id.to_string()));
            }
        }
        Ok(())
    }
}
