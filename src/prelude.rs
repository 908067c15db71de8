//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kaiwa crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kaiwa::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let flow = FlowGraph::from_file("data/conversation_flow.json")?;
//! let mut conversation = Conversation::builder(&flow).build()?;
//! let termination = conversation.run(&mut TextIo::stdio())?;
//! println!("{}", termination);
//! # Ok(())
//! # }
//! ```

// Flow graph model and loading
pub use crate::flow::{CaptureSlots, FlowGraph, IntoFlow, Node};

// Interpreter
pub use crate::interpreter::{
    Conversation, ConversationBuilder, ConversationConfig, ConversationState, Phase,
    RenderedNode, Step, Termination,
};

// I/O boundary
pub use crate::boundary::{ConversationIo, ScriptedIo, TextIo};

// Substitution
pub use crate::substitution::{substitute, substitute_bindings};

// Transcripts
pub use crate::transcript::{Transcript, TranscriptFormatter, Turn};

// Error types
pub use crate::error::{ConfigurationError, ConversationError, FlowConversionError, FlowLoadError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
