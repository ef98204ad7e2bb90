//! Station (node) type.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Connection, GraphError};

/// A stop in the transport network.
///
/// A station owns its outgoing connections, keyed by the neighbour's id.
/// Identity is the id alone: two stations with the same id are equal
/// whatever their names, coordinates or connections.
///
/// # Examples
///
/// ```
/// use transit_graph::domain::Station;
///
/// let a = Station::new("EST001", "Central");
/// let b = Station::new("EST001", "Renamed");
/// assert_eq!(a, b);
///
/// let located = Station::new("EST002", "Portal Norte")
///     .with_location(4.7627, -74.0464)
///     .unwrap();
/// assert_eq!(located.latitude(), Some(4.7627));
/// ```
#[derive(Debug, Clone)]
pub struct Station {
    id: String,
    name: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    pub(crate) connections: BTreeMap<String, Connection>,
}

impl Station {
    /// Create a station without coordinates or connections.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude: None,
            longitude: None,
            connections: BTreeMap::new(),
        }
    }

    /// Attach coordinates, checking their ranges.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Result<Self, GraphError> {
        validate_location(Some(latitude), Some(longitude))?;
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// Outgoing connections, ordered by neighbour id.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// The connection to a given neighbour, if any.
    pub fn connection_to(&self, to_id: &str) -> Option<&Connection> {
        self.connections.get(to_id)
    }

    /// Number of neighbours.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_location(&mut self, latitude: Option<f64>, longitude: Option<f64>) {
        self.latitude = latitude;
        self.longitude = longitude;
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}

/// Check optional coordinates: latitude in [-90, 90], longitude in
/// [-180, 180], both finite. Either may be absent.
pub fn validate_location(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), GraphError> {
    let lat_ok = latitude.is_none_or(|lat| lat.is_finite() && (-90.0..=90.0).contains(&lat));
    let lon_ok = longitude.is_none_or(|lon| lon.is_finite() && (-180.0..=180.0).contains(&lon));

    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(GraphError::InvalidCoordinates {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_id() {
        let a = Station::new("EST001", "Central");
        let b = Station::new("EST001", "Somewhere Else");
        let c = Station::new("EST002", "Central");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::new("EST001", "Central"));
        assert!(set.contains(&Station::new("EST001", "Other name")));
        assert!(!set.contains(&Station::new("EST002", "Central")));
    }

    #[test]
    fn with_location_accepts_bounds() {
        let s = Station::new("A", "A").with_location(-90.0, 180.0).unwrap();
        assert_eq!(s.latitude(), Some(-90.0));
        assert_eq!(s.longitude(), Some(180.0));
    }

    #[test]
    fn with_location_rejects_out_of_range() {
        assert!(Station::new("A", "A").with_location(90.5, 0.0).is_err());
        assert!(Station::new("A", "A").with_location(0.0, -180.5).is_err());
        assert!(Station::new("A", "A").with_location(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn validate_location_allows_missing() {
        assert!(validate_location(None, None).is_ok());
        assert!(validate_location(Some(4.6), None).is_ok());
        assert!(validate_location(None, Some(-74.0)).is_ok());
    }

    #[test]
    fn new_station_has_no_connections() {
        let s = Station::new("A", "Alpha");
        assert_eq!(s.degree(), 0);
        assert!(s.connection_to("B").is_none());
        assert_eq!(s.connections().count(), 0);
    }

    #[test]
    fn display() {
        let s = Station::new("EST001", "Central");
        assert_eq!(s.to_string(), "EST001 - Central");
    }
}
