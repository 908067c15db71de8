use serde::{Deserialize, Serialize};

/// Identifier of the node every conversation starts from unless configured otherwise.
pub const DEFAULT_START_NODE: &str = "Inicio";

/// Notice shown once a conversation runs out of nodes.
pub const DEFAULT_END_NOTICE: &str = "Interação encerrada";

/// Settings for a single conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    pub start_node: String,
    /// Written after the last message. An empty notice is not written at all.
    pub end_notice: String,
    /// Rewrite every message with all bindings captured so far, not only the
    /// ones declared by the node just left.
    pub retain_variables: bool,
    pub record_transcript: bool,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            start_node: DEFAULT_START_NODE.to_string(),
            end_notice: DEFAULT_END_NOTICE.to_string(),
            retain_variables: false,
            record_transcript: false,
        }
    }
}
