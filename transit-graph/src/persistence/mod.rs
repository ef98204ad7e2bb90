//! Saving and loading the graph.
//!
//! The store is captured into a [`GraphSnapshot`] and handed to a
//! [`GraphRepository`]. Two repositories are provided: a JSON file on disk
//! and an in-memory slot for tests and embedding.

mod error;
mod json;
mod memory;
mod snapshot;

use tracing::info;

use crate::graph::{GraphConfig, GraphStore};

pub use error::PersistError;
pub use json::{FORMAT_VERSION, JsonFileRepository, JsonRepositoryConfig};
pub use memory::MemoryRepository;
pub use snapshot::{ConnectionRecord, EdgeLayout, GraphSnapshot, StationRecord};

/// Where snapshots are kept.
pub trait GraphRepository {
    /// Replace the stored snapshot.
    fn save(&self, snapshot: &GraphSnapshot) -> Result<(), PersistError>;

    /// Read the stored snapshot. `Ok(None)` means nothing was stored yet.
    fn load(&self) -> Result<Option<GraphSnapshot>, PersistError>;

    /// Edge layout used when saving through this repository.
    fn layout(&self) -> EdgeLayout {
        EdgeLayout::Mirrored
    }
}

/// Result of [`GraphStore::load_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The repository had nothing; the store was left as it was.
    NoData,
    /// The store was replaced by the loaded graph.
    Loaded { stations: usize, connections: usize },
}

impl GraphStore {
    /// Save the whole graph to a repository.
    pub fn save_to<R: GraphRepository + ?Sized>(&self, repo: &R) -> Result<(), PersistError> {
        let snapshot = GraphSnapshot::capture(self, repo.layout());
        repo.save(&snapshot)?;
        info!(
            stations = self.station_count(),
            connections = self.connection_count(),
            "Saved graph"
        );
        Ok(())
    }

    /// Replace this store's contents with the graph held by a repository.
    ///
    /// The default speed is kept. On any error the store is unchanged.
    pub fn load_from<R: GraphRepository + ?Sized>(
        &mut self,
        repo: &R,
    ) -> Result<LoadOutcome, PersistError> {
        let Some(snapshot) = repo.load()? else {
            return Ok(LoadOutcome::NoData);
        };

        let graph = snapshot.restore(GraphConfig::new(self.default_speed()))?;
        let outcome = LoadOutcome::Loaded {
            stations: graph.station_count(),
            connections: graph.connection_count(),
        };
        *self = graph;
        info!(?outcome, "Loaded graph");
        Ok(outcome)
    }
}
