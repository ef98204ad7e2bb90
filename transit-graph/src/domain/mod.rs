//! Domain types for the transit graph.
//!
//! Stations, connections and route results, plus the error taxonomy shared
//! by the store and the route engine. These types carry no serialization
//! framework coupling; the persistence layer maps them to its own records.

mod connection;
mod error;
mod name;
mod route;
mod station;

pub use connection::Connection;
pub(crate) use connection::{check_speed, is_positive};
pub use error::GraphError;
pub use name::normalize_name;
pub use route::RouteResult;
pub use station::{Station, validate_location};
