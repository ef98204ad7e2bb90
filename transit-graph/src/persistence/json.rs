//! JSON file repository.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::GraphRepository;
use super::error::PersistError;
use super::snapshot::{EdgeLayout, GraphSnapshot};

/// Version written into every document; loading anything else fails.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk envelope around a snapshot.
#[derive(Debug, Serialize, Deserialize)]
struct GraphDocument<G> {
    format_version: u32,
    /// When the document was written.
    saved_at: DateTime<Utc>,
    graph: G,
}

/// Read just the version, so a newer document fails on its version
/// rather than on whatever else changed in its schema.
#[derive(Deserialize)]
struct VersionProbe {
    format_version: u32,
}

/// Configuration for the JSON file repository.
#[derive(Debug, Clone)]
pub struct JsonRepositoryConfig {
    /// Path to the graph file.
    pub path: PathBuf,
    /// How connections are written.
    pub layout: EdgeLayout,
    /// Indent the output.
    pub pretty: bool,
}

impl JsonRepositoryConfig {
    /// Create a config for the given path, writing mirrored, indented JSON.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            layout: EdgeLayout::Mirrored,
            pretty: true,
        }
    }

    /// Set the edge layout used when saving.
    pub fn with_layout(mut self, layout: EdgeLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Write compact or indented JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonRepositoryConfig {
    fn default() -> Self {
        Self::new("graph.json")
    }
}

/// Stores the graph as a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    config: JsonRepositoryConfig,
}

impl JsonFileRepository {
    pub fn new(config: JsonRepositoryConfig) -> Self {
        Self { config }
    }

    /// Get the graph file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistError {
        PersistError::Io {
            path: self.config.path.clone(),
            source,
        }
    }

    fn malformed(&self, source: serde_json::Error) -> PersistError {
        PersistError::Malformed {
            path: self.config.path.clone(),
            source,
        }
    }
}

impl GraphRepository for JsonFileRepository {
    /// Write the snapshot, creating parent directories if they don't exist.
    fn save(&self, snapshot: &GraphSnapshot) -> Result<(), PersistError> {
        let document = GraphDocument {
            format_version: FORMAT_VERSION,
            saved_at: Utc::now(),
            graph: snapshot,
        };

        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = if self.config.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
        .map_err(PersistError::Serialize)?;

        std::fs::write(&self.config.path, json).map_err(|e| self.io_error(e))?;
        debug!(path = %self.config.path.display(), "Wrote graph file");
        Ok(())
    }

    fn load(&self) -> Result<Option<GraphSnapshot>, PersistError> {
        let contents = match std::fs::read_to_string(&self.config.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.config.path.display(), "No graph file yet");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let probe: VersionProbe = serde_json::from_str(&contents).map_err(|e| self.malformed(e))?;
        if probe.format_version != FORMAT_VERSION {
            return Err(PersistError::UnsupportedVersion {
                path: self.config.path.clone(),
                found: probe.format_version,
            });
        }

        let document: GraphDocument<GraphSnapshot> =
            serde_json::from_str(&contents).map_err(|e| self.malformed(e))?;
        debug!(
            path = %self.config.path.display(),
            saved_at = %document.saved_at,
            stations = document.graph.stations.len(),
            "Read graph file"
        );
        Ok(Some(document.graph))
    }

    fn layout(&self) -> EdgeLayout {
        self.config.layout
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::graph::GraphStore;
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn arb_graph() -> impl Strategy<Value = GraphStore> {
        let station = (
            prop::option::of(-90.0f64..=90.0),
            prop::option::of(-180.0f64..=180.0),
        );
        let distance = prop_oneof![1e-9f64..1.0, 1.0f64..500.0, 500.0f64..1e12];
        let edge = (
            0usize..6,
            0usize..6,
            distance,
            prop::option::of(1e-6f64..1e3),
        );
        (
            prop::collection::vec(station, 2..6),
            prop::collection::vec(edge, 0..15),
        )
            .prop_map(|(stations, edges)| {
                let mut g = GraphStore::new();
                for (i, (lat, lon)) in stations.into_iter().enumerate() {
                    let id = format!("EST{i:03}");
                    g.add_station(id.clone(), format!("Station {i}")).unwrap();
                    g.set_location(&id, lat, lon).unwrap();
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

    proptest! {
        /// Every float survives a trip through the file unchanged
        #[test]
        fn file_round_trip_is_exact(
            g in arb_graph(),
            canonical in any::<bool>(),
            pretty in any::<bool>(),
        ) {
            let layout = if canonical { EdgeLayout::Canonical } else { EdgeLayout::Mirrored };
            let dir = tempdir().unwrap();
            let repo = JsonFileRepository::new(
                JsonRepositoryConfig::new(dir.path().join("graph.json"))
                    .with_layout(layout)
                    .with_pretty(pretty),
            );
            g.save_to(&repo).unwrap();

            let mut loaded = GraphStore::new();
            loaded.load_from(&repo).unwrap();
            prop_assert_eq!(
                GraphSnapshot::capture(&loaded, EdgeLayout::Mirrored),
                GraphSnapshot::capture(&g, EdgeLayout::Mirrored)
            );
        }
    }
}
