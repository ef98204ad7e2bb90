//! Graph store configuration.

use crate::domain::{GraphError, check_speed};

/// Default travel speed used to derive times, in distance units per hour.
pub const DEFAULT_SPEED: f64 = 40.0;

/// Configuration parameters for a graph store.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Speed used to derive a connection's travel time when it has no
    /// explicit time (`time = distance / default_speed`).
    /// Must be finite and greater than zero.
    pub default_speed: f64,
}

impl GraphConfig {
    /// Create a new configuration with the given default speed.
    pub fn new(default_speed: f64) -> Self {
        Self { default_speed }
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), GraphError> {
        check_speed(self.default_speed)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_speed: DEFAULT_SPEED,
        }
    }
}
