//! In-memory graph store.
//!
//! Holds the stations of a transport network and the undirected
//! connections between them, and keeps the two directions of every
//! connection in step.

mod config;
mod stats;
mod store;

pub use config::{DEFAULT_SPEED, GraphConfig};
pub use stats::GraphStats;
pub use store::GraphStore;

#[cfg(test)]
pub(crate) use store::tests::{assert_mirrored, sample_graph};
