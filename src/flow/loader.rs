use super::definition::{FlowGraph, Node, RawNode};
use crate::error::FlowLoadError;
use ahash::AHashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

impl FlowGraph {
    /// Parses an authored flow: a JSON object keyed by node identifier.
    ///
    /// Successor identifiers are not resolved here. A dangling `nextNode` is
    /// only noticed when a conversation tries to follow it.
    pub fn from_json(json: &str) -> Result<Self, FlowLoadError> {
        let raw: AHashMap<String, RawNode> = serde_json::from_str(json)
            .map_err(|e| FlowLoadError::JsonParseError(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FlowLoadError> {
        let raw: AHashMap<String, RawNode> = serde_json::from_reader(reader)
            .map_err(|e| FlowLoadError::JsonParseError(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    /// Loads an authored flow from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FlowLoadError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| FlowLoadError::SourceUnavailable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let graph = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), nodes = graph.len(), "Loaded conversation flow");
        Ok(graph)
    }

    /// Serializes the graph back into the authored JSON shape.
    pub fn to_json_pretty(&self) -> Result<String, FlowLoadError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FlowLoadError::SerializationError(e.to_string()))
    }

    fn from_raw(raw: AHashMap<String, RawNode>) -> Self {
        raw.into_iter()
            .map(|(id, node)| (id, Node::from(node)))
            .collect()
    }
}
