//! Transit network graph and route planner.
//!
//! Stations joined by undirected, weighted connections, with three kinds of
//! route query: shortest distance, shortest travel time and fewest
//! transfers. Graphs can be saved to and loaded from a repository.
//!
//! ```
//! use transit_graph::graph::GraphStore;
//! use transit_graph::planner::RouteEngine;
//!
//! let mut graph = GraphStore::new();
//! graph.add_station("A", "Alpha").unwrap();
//! graph.add_station("B", "Bravo").unwrap();
//! graph.add_station("C", "Charlie").unwrap();
//! graph.add_connection("A", "B", 10.0).unwrap();
//! graph.add_connection("B", "C", 15.0).unwrap();
//!
//! let route = RouteEngine::new(&graph).shortest_by_distance("A", "C").unwrap();
//! assert_eq!(route.station_ids(), vec!["A", "B", "C"]);
//! assert_eq!(route.distance, 25.0);
//! ```

pub mod domain;
pub mod graph;
pub mod persistence;
pub mod planner;
