//! Route criteria.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown criterion name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route criterion: {0} (expected distance, time or transfers)")]
pub struct UnknownCriterion(String);

/// What a route query optimises for.
///
/// # Examples
///
/// ```
/// use transit_graph::planner::Criterion;
///
/// let c: Criterion = "Time".parse().unwrap();
/// assert_eq!(c, Criterion::Time);
/// assert!("fastest".parse::<Criterion>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Criterion {
    /// Shortest total distance (Dijkstra).
    #[default]
    Distance,
    /// Shortest total travel time (Dijkstra).
    Time,
    /// Fewest hops (BFS).
    Transfers,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [Criterion::Distance, Criterion::Time, Criterion::Transfers];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Distance => "distance",
            Criterion::Time => "time",
            Criterion::Transfers => "transfers",
        }
    }
}

impl FromStr for Criterion {
    type Err = UnknownCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(Criterion::Distance),
            "time" => Ok(Criterion::Time),
            "transfers" => Ok(Criterion::Transfers),
            _ => Err(UnknownCriterion(s.to_string())),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
