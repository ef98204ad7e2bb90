//! Network summary figures.

/// Aggregate figures for a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStats {
    pub station_count: usize,
    /// Undirected connections, each counted once.
    pub connection_count: usize,
    /// Sum of distances over undirected connections.
    pub total_distance: f64,
    /// Ordered origin/destination pairs: `n * (n - 1)`.
    pub possible_routes: usize,
}

impl GraphStats {
    pub(crate) fn new(station_count: usize, connection_count: usize, total_distance: f64) -> Self {
        Self {
            station_count,
            connection_count,
            total_distance,
            possible_routes: station_count * station_count.saturating_sub(1),
        }
    }
}
