use crate::interpreter::Termination;
use serde::Serialize;

mod formatter;

pub use formatter::TranscriptFormatter;

/// One exchange: the message shown at a node and the normalized answer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub node_id: String,
    pub message: String,
    /// `None` when the input closed before an answer arrived.
    pub input: Option<String>,
}

/// A record of a whole conversation, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub turns: Vec<Turn>,
    pub termination: Option<Termination>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, node_id: &str, message: &str, input: Option<&str>) {
        self.turns.push(Turn {
            node_id: node_id.to_string(),
            message: message.to_string(),
            input: input.map(str::to_string),
        });
    }

    pub(crate) fn finish(&mut self, termination: Termination) {
        self.termination = Some(termination);
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The path walked, one node identifier per turn.
    pub fn path(&self) -> Vec<&str> {
        self.turns.iter().map(|t| t.node_id.as_str()).collect()
    }
}
