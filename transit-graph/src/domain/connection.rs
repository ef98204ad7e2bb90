//! Connection (edge) type.

use std::fmt;

use super::GraphError;

/// A direct link from one station to a neighbour.
///
/// Connections are stored per direction, but the graph store always keeps
/// the `from -> to` and `to -> from` copies in step. Two connections are
/// equal when every field matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub from_id: String,
    pub to_id: String,
    /// Physical distance, always greater than zero.
    pub distance: f64,
    /// Explicit travel time. When absent the time is derived from
    /// `distance` and the store's default speed at query time.
    pub time: Option<f64>,
}

impl Connection {
    /// Create a connection with no explicit travel time.
    pub fn new(from_id: impl Into<String>, to_id: impl Into<String>, distance: f64) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            distance,
            time: None,
        }
    }

    /// Set an explicit travel time.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// Travel time along this connection.
    ///
    /// Uses the stored time when there is one, otherwise
    /// `distance / default_speed`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if a time has to be derived and
    /// `default_speed` is not a finite number greater than zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_graph::domain::Connection;
    ///
    /// let c = Connection::new("A", "B", 20.0);
    /// assert_eq!(c.travel_time(40.0).unwrap(), 0.5);
    /// assert!(c.travel_time(0.0).is_err());
    ///
    /// let timed = c.with_time(0.25);
    /// assert_eq!(timed.travel_time(40.0).unwrap(), 0.25);
    /// ```
    pub fn travel_time(&self, default_speed: f64) -> Result<f64, GraphError> {
        if let Some(time) = self.time {
            return Ok(time);
        }
        check_speed(default_speed)?;
        Ok(self.distance / default_speed)
    }

    /// The same connection seen from the other end.
    pub fn reversed(&self) -> Self {
        Self {
            from_id: self.to_id.clone(),
            to_id: self.from_id.clone(),
            distance: self.distance,
            time: self.time,
        }
    }

    /// Direction-independent key: `(min(from, to), max(from, to))`.
    pub fn canonical_key(&self) -> (&str, &str) {
        if self.from_id <= self.to_id {
            (&self.from_id, &self.to_id)
        } else {
            (&self.to_id, &self.from_id)
        }
    }

    /// Whether this copy is the one reported for its undirected edge.
    pub fn is_canonical(&self) -> bool {
        self.from_id <= self.to_id
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({}", self.from_id, self.to_id, self.distance)?;
        if let Some(time) = self.time {
            write!(f, ", t={time}")?;
        }
        f.write_str(")")
    }
}

/// Reject a default speed that cannot be divided by.
pub(crate) fn check_speed(speed: f64) -> Result<(), GraphError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidConfiguration(format!(
            "default speed must be greater than zero, got {speed}"
        )))
    }
}

/// Distances and explicit times share the same rule: finite and positive.
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
