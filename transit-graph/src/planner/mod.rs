//! Route finding over the graph store.
//!
//! Two searches share the same path reconstruction:
//!
//! - Dijkstra, minimising distance or travel time, with a min-priority
//!   frontier and early exit once the destination is settled.
//! - Breadth-first search, minimising the number of hops.
//!
//! Whatever a search optimises, the reported distance and time are
//! recomputed from the connections along the returned path.

mod bfs;
mod criterion;
mod dijkstra;
mod engine;
mod path;

pub use criterion::{Criterion, UnknownCriterion};
pub use dijkstra::Weight;
pub use engine::{RouteComparison, RouteEngine};
