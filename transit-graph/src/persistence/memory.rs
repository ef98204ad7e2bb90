//! In-memory repository.

use std::sync::{Mutex, PoisonError};

use super::GraphRepository;
use super::error::PersistError;
use super::snapshot::{EdgeLayout, GraphSnapshot};

/// Keeps the last saved snapshot in memory.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    snapshot: Mutex<Option<GraphSnapshot>>,
    layout: EdgeLayout,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing snapshot, as if it had been saved.
    pub fn with_snapshot(snapshot: GraphSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
            layout: EdgeLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: EdgeLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The stored snapshot, if anything was saved.
    pub fn snapshot(&self) -> Option<GraphSnapshot> {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl GraphRepository for MemoryRepository {
    fn save(&self, snapshot: &GraphSnapshot) -> Result<(), PersistError> {
        *self.snapshot.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<GraphSnapshot>, PersistError> {
        Ok(self.snapshot())
    }

    fn layout(&self) -> EdgeLayout {
        self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphStore, assert_mirrored, sample_graph};
    use crate::persistence::LoadOutcome;

    #[test]
    fn empty_repository_has_no_data() {
        let repo = MemoryRepository::new();
        assert!(repo.load().unwrap().is_none());

        let mut g = GraphStore::new();
        assert_eq!(g.load_from(&repo).unwrap(), LoadOutcome::NoData);
    }

    #[test]
    fn round_trip_both_layouts() {
        let g = sample_graph();
        for layout in [EdgeLayout::Mirrored, EdgeLayout::Canonical] {
            let repo = MemoryRepository::new().with_layout(layout);
            g.save_to(&repo).unwrap();

            let mut loaded = GraphStore::new();
            loaded.load_from(&repo).unwrap();
            assert_mirrored(&loaded);
            assert_eq!(
                GraphSnapshot::capture(&loaded, EdgeLayout::Mirrored),
                GraphSnapshot::capture(&g, EdgeLayout::Mirrored)
            );
        }
    }

    #[test]
    fn save_replaces_previous() {
        let repo = MemoryRepository::new();
        sample_graph().save_to(&repo).unwrap();
        GraphStore::new().save_to(&repo).unwrap();

        assert_eq!(repo.snapshot(), Some(GraphSnapshot::default()));
    }

    #[test]
    fn load_replaces_store_contents() {
        let repo = MemoryRepository::with_snapshot(GraphSnapshot::capture(
            &sample_graph(),
            EdgeLayout::Canonical,
        ));

        let mut g = GraphStore::new();
        g.add_station("Z", "Zulu").unwrap();
        g.load_from(&repo).unwrap();

        assert!(!g.contains_station("Z"));
        assert_eq!(g.station_count(), 4);
        assert_eq!(g.connection_count(), 4);
    }
}
