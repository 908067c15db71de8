use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Placeholder bindings declared on a node: arbitrary key -> placeholder name.
pub type CaptureSlots = AHashMap<String, String>;

/// A single point in the conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Template shown to the user. May contain `{name}` placeholders.
    #[serde(rename = "botMessage", default)]
    pub message: String,
    /// Identifier of the successor node. Empty means terminal.
    #[serde(rename = "nextNode", default)]
    pub next_node: String,
    /// When non-empty, the user's answer at this node is bound to every listed
    /// placeholder name in the *next* node's message.
    #[serde(rename = "variableResponse", default)]
    pub capture_slots: CaptureSlots,
}

impl Node {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_next(mut self, next_node: impl Into<String>) -> Self {
        self.next_node = next_node.into();
        self
    }

    pub fn with_capture(mut self, key: impl Into<String>, placeholder: impl Into<String>) -> Self {
        self.capture_slots.insert(key.into(), placeholder.into());
        self
    }

    /// The successor identifier, or `None` when this node is terminal.
    pub fn successor(&self) -> Option<&str> {
        if self.next_node.is_empty() {
            None
        } else {
            Some(&self.next_node)
        }
    }

    pub fn captures_input(&self) -> bool {
        !self.capture_slots.is_empty()
    }
}

/// An immutable mapping from node identifier to node definition.
///
/// Built once from external data and only ever read afterwards, so a single
/// graph can back any number of independent conversations by shared reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowGraph {
    nodes: AHashMap<String, Node>,
}

impl FlowGraph {
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Like `get`, but also hands back the stored identifier.
    pub fn get_entry(&self, id: &str) -> Option<(&str, &Node)> {
        self.nodes
            .get_key_value(id)
            .map(|(id, node)| (id.as_str(), node))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over `(id, node)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    /// All node identifiers, sorted.
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.keys().map(String::as_str).sorted().collect()
    }
}

impl FromIterator<(String, Node)> for FlowGraph {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// Lenient mirror of `Node` for authored JSON, where any field may be missing or `null`.
#[derive(Deserialize)]
pub(super) struct RawNode {
    #[serde(alias = "botMessage")]
    message: Option<String>,
    #[serde(alias = "nextNode", alias = "nextNodeId", alias = "next")]
    next_node: Option<String>,
    #[serde(alias = "variableResponse", alias = "captureSlots", alias = "slots")]
    capture_slots: Option<CaptureSlots>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        Node {
            message: raw.message.unwrap_or_default(),
            next_node: raw.next_node.unwrap_or_default(),
            capture_slots: raw.capture_slots.unwrap_or_default(),
        }
    }
}
