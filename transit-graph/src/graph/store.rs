//! The graph store.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{
    Connection, GraphError, Station, check_speed, is_positive, normalize_name, validate_location,
};

use super::config::GraphConfig;
use super::stats::GraphStats;

/// Owns every station and connection of a transport network.
///
/// Connections are symmetric: adding, editing or deleting `a -> b` always
/// does the same to `b -> a` in the same call. Every operation checks its
/// preconditions before mutating, so a failed call leaves the store as it was.
///
/// Stations are kept ordered by id, which makes iteration (and so route
/// tie-breaking) deterministic.
///
/// # Examples
///
/// ```
/// use transit_graph::graph::GraphStore;
///
/// let mut graph = GraphStore::new();
/// graph.add_station("A", "Alpha").unwrap();
/// graph.add_station("B", "Beta").unwrap();
/// graph.add_connection("A", "B", 12.5).unwrap();
///
/// assert!(graph.get_connection("B", "A").is_some());
/// assert_eq!(graph.all_connections().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GraphStore {
    stations: BTreeMap<String, Station>,
    default_speed: f64,
}

impl GraphStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self {
            stations: BTreeMap::new(),
            default_speed: GraphConfig::default().default_speed,
        }
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: GraphConfig) -> Result<Self, GraphError> {
        config.validate()?;
        Ok(Self {
            stations: BTreeMap::new(),
            default_speed: config.default_speed,
        })
    }

    // ---- stations ----

    /// Add a station. Only the id has to be unique.
    pub fn add_station(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), GraphError> {
        self.insert_station(Station::new(id, name), true)
    }

    /// Add a station, also rejecting a name that matches an existing one
    /// after normalization unless `force` is set.
    ///
    /// `force` never bypasses the id check.
    pub fn add_station_checked(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        force: bool,
    ) -> Result<(), GraphError> {
        self.insert_station(Station::new(id, name), force)
    }

    /// Add a fully described station (e.g. one with coordinates).
    ///
    /// Follows the same rules as [`GraphStore::add_station_checked`].
    /// Any connections the value carries are dropped: connections only
    /// enter the store through the connection operations.
    pub fn insert_station(&mut self, mut station: Station, force: bool) -> Result<(), GraphError> {
        if station.id().trim().is_empty() {
            return Err(GraphError::EmptyField("station id"));
        }
        if station.name().trim().is_empty() {
            return Err(GraphError::EmptyField("station name"));
        }
        validate_location(station.latitude(), station.longitude())?;

        if self.stations.contains_key(station.id()) {
            return Err(GraphError::DuplicateId(station.id().to_string()));
        }
        if !force && self.name_taken(station.name(), None) {
            return Err(GraphError::DuplicateName(station.name().to_string()));
        }

        station.connections.clear();
        debug!(id = station.id(), name = station.name(), "Adding station");
        self.stations.insert(station.id().to_string(), station);
        Ok(())
    }

    /// Rename a station, keeping names unique among the other stations.
    pub fn edit_station(&mut self, id: &str, new_name: impl Into<String>) -> Result<(), GraphError> {
        let new_name = new_name.into();
        if !self.stations.contains_key(id) {
            return Err(GraphError::NotFound(id.to_string()));
        }
        if new_name.trim().is_empty() {
            return Err(GraphError::EmptyField("station name"));
        }
        if self.name_taken(&new_name, Some(id)) {
            return Err(GraphError::DuplicateName(new_name));
        }

        if let Some(station) = self.stations.get_mut(id) {
            station.set_name(new_name);
        }
        Ok(())
    }

    /// Set or clear a station's coordinates.
    pub fn set_location(
        &mut self,
        id: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<(), GraphError> {
        validate_location(latitude, longitude)?;
        let station = self
            .stations
            .get_mut(id)
            .ok_or_else(|| GraphError::NotFound(id.to_string()))?;
        station.set_location(latitude, longitude);
        Ok(())
    }

    /// Remove a station and every connection touching it.
    pub fn delete_station(&mut self, id: &str) -> Result<(), GraphError> {
        let removed = self
            .stations
            .remove(id)
            .ok_or_else(|| GraphError::NotFound(id.to_string()))?;

        for neighbour in removed.connections.keys() {
            if let Some(station) = self.stations.get_mut(neighbour) {
                station.connections.remove(id);
            }
        }

        debug!(
            id,
            connections = removed.connections.len(),
            "Deleted station"
        );
        Ok(())
    }

    pub fn get_station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn contains_station(&self, id: &str) -> bool {
        self.stations.contains_key(id)
    }

    /// All stations, ordered by id.
    pub fn all_stations(&self) -> Vec<&Station> {
        self.stations.values().collect()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations whose id or name contains `query`.
    ///
    /// Both names and ids are compared after normalization.
    /// A blank query matches every station.
    pub fn search_stations(&self, query: &str) -> Vec<&Station> {
        let needle = normalize_name(query);
        if needle.is_empty() {
            return self.all_stations();
        }

        self.stations
            .values()
            .filter(|s| {
                normalize_name(s.name()).contains(&needle)
                    || normalize_name(s.id()).contains(&needle)
            })
            .collect()
    }

    // ---- connections ----

    /// Connect two stations in both directions.
    ///
    /// Checks, in order: the ends differ (case-insensitively), both
    /// stations exist, the distance is positive, and the stations are not
    /// already connected.
    pub fn add_connection(&mut self, from: &str, to: &str, distance: f64) -> Result<(), GraphError> {
        self.add_connection_with_time(from, to, distance, None)
    }

    /// Like [`GraphStore::add_connection`], with an explicit travel time.
    pub fn add_connection_with_time(
        &mut self,
        from: &str,
        to: &str,
        distance: f64,
        time: Option<f64>,
    ) -> Result<(), GraphError> {
        if from.to_lowercase() == to.to_lowercase() {
            return Err(GraphError::SameStation(from.to_string()));
        }
        let origin = self
            .stations
            .get(from)
            .ok_or_else(|| GraphError::NotFound(from.to_string()))?;
        if !self.stations.contains_key(to) {
            return Err(GraphError::NotFound(to.to_string()));
        }
        if !is_positive(distance) {
            return Err(GraphError::InvalidDistance(distance));
        }
        if let Some(t) = time
            && !is_positive(t)
        {
            return Err(GraphError::InvalidTime(t));
        }
        if origin.connections.contains_key(to) {
            return Err(GraphError::AlreadyExists {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let connection = Connection {
            from_id: from.to_string(),
            to_id: to.to_string(),
            distance,
            time,
        };
        debug!(%connection, "Adding connection");
        self.put_pair(connection);
        Ok(())
    }

    /// Change the distance of an existing connection, in both directions.
    pub fn edit_connection(
        &mut self,
        from: &str,
        to: &str,
        new_distance: f64,
    ) -> Result<(), GraphError> {
        let mut connection = self.mirrored(from, to)?.clone();
        if !is_positive(new_distance) {
            return Err(GraphError::InvalidDistance(new_distance));
        }

        connection.distance = new_distance;
        self.put_pair(connection);
        Ok(())
    }

    /// Set or clear the explicit travel time of a connection, in both
    /// directions.
    pub fn set_connection_time(
        &mut self,
        from: &str,
        to: &str,
        time: Option<f64>,
    ) -> Result<(), GraphError> {
        let mut connection = self.mirrored(from, to)?.clone();
        if let Some(t) = time
            && !is_positive(t)
        {
            return Err(GraphError::InvalidTime(t));
        }

        connection.time = time;
        self.put_pair(connection);
        Ok(())
    }

    /// Remove a connection in both directions.
    pub fn delete_connection(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        self.mirrored(from, to)?;

        if let Some(station) = self.stations.get_mut(from) {
            station.connections.remove(to);
        }
        if let Some(station) = self.stations.get_mut(to) {
            station.connections.remove(from);
        }
        debug!(from, to, "Deleted connection");
        Ok(())
    }

    /// The stored `from -> to` connection.
    pub fn get_connection(&self, from: &str, to: &str) -> Option<&Connection> {
        self.stations.get(from)?.connection_to(to)
    }

    /// Every undirected connection once, in its canonical direction
    /// (`from_id < to_id`), ordered by `from_id` then `to_id`.
    pub fn all_connections(&self) -> Vec<&Connection> {
        self.stations
            .values()
            .flat_map(Station::connections)
            .filter(|c| c.is_canonical())
            .collect()
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.stations
            .values()
            .flat_map(Station::connections)
            .filter(|c| c.is_canonical())
            .count()
    }

    // ---- whole graph ----

    /// Remove every station and connection. The default speed is kept.
    pub fn clear(&mut self) {
        self.stations.clear();
    }

    /// Speed used to derive travel times for connections without one.
    pub fn default_speed(&self) -> f64 {
        self.default_speed
    }

    /// Change the default speed. It must be finite and greater than zero.
    pub fn set_default_speed(&mut self, speed: f64) -> Result<(), GraphError> {
        check_speed(speed)?;
        self.default_speed = speed;
        Ok(())
    }

    /// Travel time of a stored connection under this store's default speed.
    pub fn travel_time(&self, connection: &Connection) -> f64 {
        // The store never holds a speed that check_speed rejects.
        connection
            .travel_time(self.default_speed)
            .unwrap_or(f64::INFINITY)
    }

    /// Summary figures for the network.
    pub fn stats(&self) -> GraphStats {
        let connections = self.all_connections();
        let total_distance = connections.iter().map(|c| c.distance).sum();
        GraphStats::new(self.stations.len(), connections.len(), total_distance)
    }

    // ---- internals ----

    /// Whether any station other than `except` has this name once normalized.
    fn name_taken(&self, name: &str, except: Option<&str>) -> bool {
        let wanted = normalize_name(name);
        self.stations
            .values()
            .filter(|s| Some(s.id()) != except)
            .any(|s| normalize_name(s.name()) == wanted)
    }

    /// Look up `from -> to`, requiring the `to -> from` mirror as well.
    fn mirrored(&self, from: &str, to: &str) -> Result<&Connection, GraphError> {
        let missing = || GraphError::ConnectionNotFound {
            from: from.to_string(),
            to: to.to_string(),
        };

        let origin = self
            .stations
            .get(from)
            .ok_or_else(|| GraphError::NotFound(from.to_string()))?;
        let destination = self
            .stations
            .get(to)
            .ok_or_else(|| GraphError::NotFound(to.to_string()))?;

        let forward = origin.connection_to(to).ok_or_else(missing)?;
        destination.connection_to(from).ok_or_else(missing)?;
        Ok(forward)
    }

    /// Store a connection and its mirror. Both endpoints must exist.
    fn put_pair(&mut self, connection: Connection) {
        let mirror = connection.reversed();
        if let Some(station) = self.stations.get_mut(&connection.from_id) {
            station
                .connections
                .insert(connection.to_id.clone(), connection);
        }
        if let Some(station) = self.stations.get_mut(&mirror.from_id) {
            station.connections.insert(mirror.to_id.clone(), mirror);
        }
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
