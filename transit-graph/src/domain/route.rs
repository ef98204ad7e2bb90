//! Route query results.

use super::Station;

/// The outcome of a route query.
///
/// An empty `path` means no route exists; in that case `distance` and
/// `time` are `f64::INFINITY` and `transfers` is `-1`. Use
/// [`RouteResult::is_found`] rather than comparing against the sentinels.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Stations from origin to destination, inclusive.
    pub path: Vec<Station>,
    /// Sum of connection distances along `path`.
    pub distance: f64,
    /// Sum of connection travel times along `path`.
    pub time: f64,
    /// Number of hops, `path.len() - 1`, or `-1` when unreachable.
    pub transfers: i32,
}

impl RouteResult {
    /// The "no route" sentinel.
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
            time: f64::INFINITY,
            transfers: -1,
        }
    }

    /// Build a result for a found path, deriving the transfer count.
    pub fn found(path: Vec<Station>, distance: f64, time: f64) -> Self {
        let hops = path.len().saturating_sub(1);
        Self {
            path,
            distance,
            time,
            transfers: i32::try_from(hops).unwrap_or(i32::MAX),
        }
    }

    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Station ids along the path.
    pub fn station_ids(&self) -> Vec<&str> {
        self.path.iter().map(Station::id).collect()
    }

    /// First station of the path.
    pub fn origin(&self) -> Option<&Station> {
        self.path.first()
    }

    /// Last station of the path.
    pub fn destination(&self) -> Option<&Station> {
        self.path.last()
    }
}
