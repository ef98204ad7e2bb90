//! Domain error types.
//!
//! These errors are returned by every graph mutation and route query.
//! They describe rejected input and missing data; they never signal a
//! half-applied mutation, because the store checks everything up front.

/// Errors from graph store operations and route queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A station with this id already exists
    #[error("station id already exists: {0}")]
    DuplicateId(String),

    /// Another station already uses this name (after normalization)
    #[error("station name already in use: {0}")]
    DuplicateName(String),

    /// No station with this id
    #[error("station not found: {0}")]
    NotFound(String),

    /// No connection between the two stations
    #[error("connection not found: {from} -> {to}")]
    ConnectionNotFound { from: String, to: String },

    /// Both ends of a connection are the same station
    #[error("cannot connect station {0} to itself")]
    SameStation(String),

    /// Distance must be a finite number greater than zero
    #[error("invalid distance: {0} (must be greater than zero)")]
    InvalidDistance(f64),

    /// Explicit travel time must be a finite number greater than zero
    #[error("invalid travel time: {0} (must be greater than zero)")]
    InvalidTime(f64),

    /// A connection between the two stations already exists
    #[error("connection already exists: {from} -> {to}")]
    AlreadyExists { from: String, to: String },

    /// Configuration value out of range (e.g. non-positive default speed)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Latitude or longitude out of range
    #[error("invalid coordinates: latitude {latitude:?}, longitude {longitude:?}")]
    InvalidCoordinates {
        latitude: Option<f64>,
        longitude: Option<f64>,
    },

    /// A required text field is blank
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::DuplicateId("EST001".into());
        assert_eq!(err.to_string(), "station id already exists: EST001");

        let err = GraphError::NotFound("EST999".into());
        assert_eq!(err.to_string(), "station not found: EST999");

        let err = GraphError::ConnectionNotFound {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(err.to_string(), "connection not found: A -> B");

        let err = GraphError::SameStation("A".into());
        assert_eq!(err.to_string(), "cannot connect station A to itself");

        let err = GraphError::InvalidDistance(-3.0);
        assert_eq!(
            err.to_string(),
            "invalid distance: -3 (must be greater than zero)"
        );

        let err = GraphError::EmptyField("name");
        assert_eq!(err.to_string(), "name must not be empty");

        let err = GraphError::InvalidCoordinates {
            latitude: Some(91.0),
            longitude: None,
        };
        assert_eq!(
            err.to_string(),
            "invalid coordinates: latitude Some(91.0), longitude None"
        );
    }
}
