use thiserror::Error;

/// Errors that can occur while loading (or writing back) a flow graph's external representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowLoadError {
    #[error("Failed to parse conversation flow JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read flow source '{path}': {message}")]
    SourceUnavailable { path: String, message: String },

    #[error("Flow snapshot could not be processed: {0}")]
    SnapshotError(String),

    #[error("Failed to serialize conversation flow: {0}")]
    SerializationError(String),
}

/// Errors that can occur when converting a custom authoring format into a `FlowGraph`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowConversionError {
    #[error("Node '{0}' is defined more than once")]
    DuplicateNode(String),

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors raised while configuring a conversation, before any I/O happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Start node '{0}' was not found in the conversation flow")]
    StartNodeNotFound(String),
}

/// Errors that abort a running conversation.
///
/// A dangling successor is deliberately absent here: it ends the conversation
/// through `Termination::DanglingTransition` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("I/O failure at the conversation boundary: {0}")]
    Io(String),
}

impl From<std::io::Error> for ConversationError {
    fn from(err: std::io::Error) -> Self {
        ConversationError::Io(err.to_string())
    }
}
