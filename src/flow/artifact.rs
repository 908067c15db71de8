use super::definition::FlowGraph;
use crate::error::FlowLoadError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Conventional file extension for binary flow snapshots.
pub const SNAPSHOT_EXTENSION: &str = "kaiwa";

impl FlowGraph {
    /// Encodes the graph into the compact bincode snapshot format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FlowLoadError> {
        encode_to_vec(self, standard())
            .map_err(|e| FlowLoadError::SnapshotError(format!("Serialization failed: {}", e)))
    }

    /// Decodes a graph from a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FlowLoadError> {
        decode_from_slice(bytes, standard())
            .map(|(graph, _)| graph)
            .map_err(|e| FlowLoadError::SnapshotError(format!("Deserialization failed: {}", e)))
    }

    /// Saves the graph to a snapshot file.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), FlowLoadError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            FlowLoadError::SnapshotError(format!(
                "Could not create file '{}': {}",
                path.display(),
                e
            ))
        })?;
        file.write_all(&bytes).map_err(|e| {
            FlowLoadError::SnapshotError(format!(
                "Could not write to file '{}': {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote flow snapshot");
        Ok(())
    }

    /// Loads a graph from a snapshot file.
    pub fn from_snapshot_file(path: impl AsRef<Path>) -> Result<Self, FlowLoadError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(|e| FlowLoadError::SourceUnavailable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| FlowLoadError::SourceUnavailable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::from_bytes(&bytes)
    }

    /// Loads a graph from either a snapshot (by extension) or an authored JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FlowLoadError> {
        let path = path.as_ref();
        let is_snapshot = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SNAPSHOT_EXTENSION));
        if is_snapshot {
            Self::from_snapshot_file(path)
        } else {
            Self::from_file(path)
        }
    }
}
