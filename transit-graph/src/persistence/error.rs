//! Persistence error types.

use std::path::PathBuf;

use crate::domain::GraphError;

/// Errors that can occur while saving or loading a graph.
///
/// A missing source is not an error: repositories report it as
/// `Ok(None)` from `load`.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not a valid graph document
    #[error("malformed graph file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The snapshot could not be encoded
    #[error("failed to serialize graph: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The document was written by an incompatible format version
    #[error("unsupported format version {found} in {path}")]
    UnsupportedVersion { path: PathBuf, found: u32 },

    /// The document parsed but describes an invalid graph
    #[error("invalid graph data: {0}")]
    InvalidGraph(#[from] GraphError),
}
