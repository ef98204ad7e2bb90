//! Snapshot schema and the mapping between it and the graph store.
//!
//! The snapshot is the logical document every repository reads and writes:
//! an ordered list of stations, each with its outgoing connections. Some
//! producers write both directions of every connection, others only one;
//! restoring accepts either and rebuilds the mirrored pairs.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{Connection, GraphError, Station};
use crate::graph::{GraphConfig, GraphStore};

/// How connections are written into a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeLayout {
    /// Both directions, each under its own origin station.
    #[default]
    Mirrored,
    /// Each undirected connection once, under the station with the
    /// smaller id.
    Canonical,
}

/// A full graph, ready to serialize.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub stations: Vec<StationRecord>,
}

/// One station and its outgoing connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

/// An outgoing connection; the origin is the enclosing station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub to_id: String,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

impl From<&Connection> for ConnectionRecord {
    fn from(c: &Connection) -> Self {
        Self {
            to_id: c.to_id.clone(),
            distance: c.distance,
            time: c.time,
        }
    }
}

impl StationRecord {
    fn capture(station: &Station, layout: EdgeLayout) -> Self {
        Self {
            id: station.id().to_string(),
            name: station.name().to_string(),
            latitude: station.latitude(),
            longitude: station.longitude(),
            connections: station
                .connections()
                .filter(|c| layout == EdgeLayout::Mirrored || c.is_canonical())
                .map(ConnectionRecord::from)
                .collect(),
        }
    }
}

impl GraphSnapshot {
    /// Take a snapshot of the whole store. Stations are ordered by id.
    pub fn capture(graph: &GraphStore, layout: EdgeLayout) -> Self {
        Self {
            stations: graph
                .all_stations()
                .into_iter()
                .map(|s| StationRecord::capture(s, layout))
                .collect(),
        }
    }

    /// Build a new store from this snapshot.
    ///
    /// Stations go through the normal store checks (duplicate ids, blank
    /// fields, coordinate ranges all fail). Connections are re-mirrored:
    /// a connection listed from either end, or from both, ends up as one
    /// mirrored pair. Connections to unknown stations or to their own
    /// station are skipped with a warning. When both ends list the same
    /// connection with different values, the one listed last wins.
    pub fn restore(&self, config: GraphConfig) -> Result<GraphStore, GraphError> {
        let mut graph = GraphStore::with_config(config)?;

        for record in &self.stations {
            graph.insert_station(Station::new(&record.id, &record.name), true)?;
            graph.set_location(&record.id, record.latitude, record.longitude)?;
        }

        let mut skipped = 0usize;
        for record in &self.stations {
            for edge in &record.connections {
                let from = record.id.as_str();
                let to = edge.to_id.as_str();

                if !graph.contains_station(to) || from.to_lowercase() == to.to_lowercase() {
                    warn!(from, to, "Skipping connection with invalid endpoint");
                    skipped += 1;
                    continue;
                }

                match graph.get_connection(from, to).cloned() {
                    None => graph.add_connection_with_time(from, to, edge.distance, edge.time)?,
                    Some(existing)
                        if existing.distance == edge.distance && existing.time == edge.time => {}
                    Some(existing) => {
                        warn!(
                            from,
                            to,
                            old = existing.distance,
                            new = edge.distance,
                            "Conflicting copies of a connection, keeping the later one"
                        );
                        graph.edit_connection(from, to, edge.distance)?;
                        graph.set_connection_time(from, to, edge.time)?;
                    }
                }
            }
        }

        info!(
            stations = graph.station_count(),
            connections = graph.connection_count(),
            skipped,
            "Restored graph from snapshot"
        );
        Ok(graph)
    }

    /// Number of connection records, counting each listed direction.
    pub fn connection_records(&self) -> usize {
        self.stations.iter().map(|s| s.connections.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{assert_mirrored, sample_graph};

    fn record(id: &str, edges: &[(&str, f64)]) -> StationRecord {
        StationRecord {
            id: id.to_string(),
            name: format!("Station {id}"),
            latitude: None,
            longitude: None,
            connections: edges
                .iter()
                .map(|(to, d)| ConnectionRecord {
                    to_id: to.to_string(),
                    distance: *d,
                    time: None,
                })
                .collect(),
        }
    }

    #[test]
    fn capture_mirrored_lists_both_directions() {
        let g = sample_graph();
        let snap = GraphSnapshot::capture(&g, EdgeLayout::Mirrored);
        assert_eq!(snap.stations.len(), 4);
        assert_eq!(snap.connection_records(), 8);
        let ids: Vec<&str> = snap.stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn capture_canonical_lists_each_once() {
        let g = sample_graph();
        let snap = GraphSnapshot::capture(&g, EdgeLayout::Canonical);
        assert_eq!(snap.connection_records(), 4);
        // D has the largest id, so it lists nothing
        assert!(snap.stations[3].connections.is_empty());
    }

    #[test]
    fn restore_both_layouts_equal() {
        let g = sample_graph();
        for layout in [EdgeLayout::Mirrored, EdgeLayout::Canonical] {
            let snap = GraphSnapshot::capture(&g, layout);
            let restored = snap.restore(GraphConfig::default()).unwrap();
            assert_mirrored(&restored);
            assert_eq!(
                GraphSnapshot::capture(&restored, EdgeLayout::Mirrored),
                GraphSnapshot::capture(&g, EdgeLayout::Mirrored)
            );
        }
    }

    #[test]
    fn restore_remirrors_one_sided_edges() {
        // Only the "larger" end lists the connection
        let snap = GraphSnapshot {
            stations: vec![record("A", &[]), record("B", &[("A", 7.0)])],
        };
        let g = snap.restore(GraphConfig::default()).unwrap();
        assert_eq!(g.get_connection("A", "B").unwrap().distance, 7.0);
        assert_eq!(g.get_connection("B", "A").unwrap().distance, 7.0);
        assert_eq!(g.connection_count(), 1);
    }

    #[test]
    fn restore_skips_dangling_and_self_edges() {
        let snap = GraphSnapshot {
            stations: vec![
                record("A", &[("Z", 3.0), ("A", 1.0), ("B", 2.0)]),
                record("B", &[]),
            ],
        };
        let g = snap.restore(GraphConfig::default()).unwrap();
        assert_eq!(g.connection_count(), 1);
        assert!(g.get_connection("A", "Z").is_none());
        assert_mirrored(&g);
    }

    #[test]
    fn restore_conflict_keeps_last() {
        let snap = GraphSnapshot {
            stations: vec![record("A", &[("B", 5.0)]), record("B", &[("A", 9.0)])],
        };
        let g = snap.restore(GraphConfig::default()).unwrap();
        assert_eq!(g.get_connection("A", "B").unwrap().distance, 9.0);
        assert_mirrored(&g);
    }

    #[test]
    fn restore_rejects_duplicate_ids() {
        let snap = GraphSnapshot {
            stations: vec![record("A", &[]), record("A", &[])],
        };
        assert_eq!(
            snap.restore(GraphConfig::default()).unwrap_err(),
            GraphError::DuplicateId("A".into())
        );
    }

    #[test]
    fn restore_rejects_bad_distance() {
        let snap = GraphSnapshot {
            stations: vec![record("A", &[("B", -1.0)]), record("B", &[])],
        };
        assert_eq!(
            snap.restore(GraphConfig::default()).unwrap_err(),
            GraphError::InvalidDistance(-1.0)
        );
    }

    #[test]
    fn restore_keeps_coordinates_and_times() {
        let mut g = sample_graph();
        g.set_location("A", Some(4.65), Some(-74.05)).unwrap();
        g.set_location("B", Some(5.0), None).unwrap();
        g.set_connection_time("A", "B", Some(0.3)).unwrap();

        let restored = GraphSnapshot::capture(&g, EdgeLayout::Canonical)
            .restore(GraphConfig::default())
            .unwrap();
        let a = restored.get_station("A").unwrap();
        assert_eq!(a.latitude(), Some(4.65));
        assert_eq!(a.longitude(), Some(-74.05));
        assert_eq!(restored.get_station("B").unwrap().longitude(), None);
        assert_eq!(restored.get_connection("B", "A").unwrap().time, Some(0.3));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let snap = GraphSnapshot {
            stations: vec![record("A", &[("B", 2.5)])],
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(
            json,
            r#"{"stations":[{"id":"A","name":"Station A","connections":[{"to_id":"B","distance":2.5}]}]}"#
        );
    }

    #[test]
    fn missing_connections_default_to_empty() {
        let snap: GraphSnapshot =
            serde_json::from_str(r#"{"stations":[{"id":"A","name":"Alpha"}]}"#).unwrap();
        assert!(snap.stations[0].connections.is_empty());
        assert_eq!(snap.stations[0].latitude, None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_graph() -> impl Strategy<Value = GraphStore> {
        let station = (0usize..8, prop::option::of(-90.0f64..=90.0));
        let edge = (0usize..8, 0usize..8, 0.5f64..500.0, prop::option::of(0.1f64..10.0));
        (
            prop::collection::vec(station, 0..8),
            prop::collection::vec(edge, 0..20),
        )
            .prop_map(|(stations, edges)| {
                let mut g = GraphStore::new();
                for (i, lat) in stations {
                    let id = format!("EST{i:03}");
                    if g.add_station(id.clone(), format!("Station {i}")).is_ok() {
                        g.set_location(&id, lat, None).unwrap();
                    }
                }
                for (a, b, d, t) in edges {
                    let _ = g.add_connection_with_time(
                        &format!("EST{a:03}"),
                        &format!("EST{b:03}"),
                        d,
                        t,
                    );
                }
                g
            })
    }

    fn arb_layout() -> impl Strategy<Value = EdgeLayout> {
        prop_oneof![Just(EdgeLayout::Mirrored), Just(EdgeLayout::Canonical)]
    }

    proptest! {
        /// Capture then restore reproduces the same graph
        #[test]
        fn capture_restore(g in arb_graph(), layout in arb_layout()) {
            let restored = GraphSnapshot::capture(&g, layout)
                .restore(GraphConfig::default())
                .unwrap();
            prop_assert_eq!(
                GraphSnapshot::capture(&restored, EdgeLayout::Mirrored),
                GraphSnapshot::capture(&g, EdgeLayout::Mirrored)
            );
        }
    }
}
