use crate::boundary::ConversationIo;
use crate::error::{ConfigurationError, ConversationError};
use crate::flow::{FlowGraph, Node};
use crate::substitution::{substitute, substitute_bindings};
use crate::transcript::Transcript;
use std::borrow::Cow;

mod config;
mod state;

pub use config::*;
pub use state::*;

/// Walks a `FlowGraph` one node per user answer.
///
/// A `Conversation` borrows its graph immutably. Rewritten messages live in the
/// conversation's own `RenderedNode`, so several conversations may share one
/// graph and revisiting a node always starts from its stored template.
pub struct Conversation<'g> {
    graph: &'g FlowGraph,
    config: ConversationConfig,
    state: ConversationState,
    current: RenderedNode<'g>,
    transcript: Option<Transcript>,
}

pub struct ConversationBuilder<'g> {
    graph: &'g FlowGraph,
    config: ConversationConfig,
}

impl<'g> ConversationBuilder<'g> {
    pub fn new(graph: &'g FlowGraph) -> Self {
        Self {
            graph,
            config: ConversationConfig::default(),
        }
    }

    pub fn config(mut self, config: ConversationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn start_node(mut self, id: impl Into<String>) -> Self {
        self.config.start_node = id.into();
        self
    }

    pub fn end_notice(mut self, notice: impl Into<String>) -> Self {
        self.config.end_notice = notice.into();
        self
    }

    pub fn retain_variables(mut self, retain: bool) -> Self {
        self.config.retain_variables = retain;
        self
    }

    pub fn record_transcript(mut self, record: bool) -> Self {
        self.config.record_transcript = record;
        self
    }

    pub fn build(self) -> Result<Conversation<'g>, ConfigurationError> {
        Conversation::new(self.graph, self.config)
    }
}

impl<'g> Conversation<'g> {
    pub fn builder(graph: &'g FlowGraph) -> ConversationBuilder<'g> {
        ConversationBuilder::new(graph)
    }

    /// Prepares a conversation positioned at `config.start_node`.
    ///
    /// Fails when the start node is missing; nothing has been read or written yet.
    pub fn new(
        graph: &'g FlowGraph,
        config: ConversationConfig,
    ) -> Result<Self, ConfigurationError> {
        let (id, node) = graph
            .get_entry(&config.start_node)
            .ok_or_else(|| ConfigurationError::StartNodeNotFound(config.start_node.clone()))?;
        let transcript = config.record_transcript.then(Transcript::new);
        Ok(Self {
            graph,
            state: ConversationState::new(id),
            current: RenderedNode::verbatim(id, node),
            config,
            transcript,
        })
    }

    pub fn graph(&self) -> &'g FlowGraph {
        self.graph
    }

    pub fn config(&self) -> &ConversationConfig {
        &self.config
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// The node the next step will show, or `None` once terminated.
    pub fn current(&self) -> Option<&RenderedNode<'g>> {
        (!self.state.is_terminated()).then_some(&self.current)
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    pub fn into_transcript(self) -> Option<Transcript> {
        self.transcript
    }

    /// Runs steps until the conversation terminates.
    pub fn run<IO: ConversationIo + ?Sized>(
        &mut self,
        io: &mut IO,
    ) -> Result<Termination, ConversationError> {
        tracing::info!(start = %self.current.id, "Conversation started");
        loop {
            if let Step::Terminated(termination) = self.step(io)? {
                return Ok(termination);
            }
        }
    }

    /// Shows the current message, reads one answer and moves to the successor.
    ///
    /// Once terminated, further calls do no I/O and report the same termination.
    pub fn step<IO: ConversationIo + ?Sized>(
        &mut self,
        io: &mut IO,
    ) -> Result<Step, ConversationError> {
        if let Some(termination) = self.state.termination() {
            return Ok(Step::Terminated(termination.clone()));
        }

        let graph = self.graph;
        let from_id = self.current.id;
        let from_node = self.current.node;
        io.write_line(&self.current.message)?;

        let Some(raw) = io.read_line()? else {
            if let Some(transcript) = self.transcript.as_mut() {
                transcript.record(from_id, &self.current.message, None);
            }
            // A node that ends the conversation does so whatever the answer is.
            let termination = match resolve_successor(graph, from_id, from_node) {
                Err(ending) => ending,
                Ok(_) => Termination::InputClosed {
                    at_node: from_id.to_string(),
                },
            };
            return self.finish(io, termination);
        };
        let captured = normalize_input(&raw);
        self.state.steps += 1;
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.record(from_id, &self.current.message, Some(&captured));
        }
        for name in from_node.capture_slots.values() {
            self.state.variables.insert(name.clone(), captured.clone());
        }

        let (next_id, next_node) = match resolve_successor(graph, from_id, from_node) {
            Ok(next) => next,
            Err(ending) => {
                self.state.last_input = Some(captured);
                return self.finish(io, ending);
            }
        };

        let message = if self.config.retain_variables && !self.state.variables.is_empty() {
            Cow::Owned(substitute_bindings(&next_node.message, &self.state.variables))
        } else if from_node.captures_input() {
            Cow::Owned(substitute(&next_node.message, &from_node.capture_slots, &captured))
        } else {
            Cow::Borrowed(next_node.message.as_str())
        };
        let rewritten = matches!(message, Cow::Owned(_));
        tracing::debug!(from = %from_id, to = %next_id, rewritten, "Advancing conversation");

        self.state.last_input = Some(captured);
        self.state.phase = Phase::Active(next_id.to_string());
        self.current = RenderedNode {
            id: next_id,
            message,
            node: next_node,
        };
        Ok(Step::Advanced {
            from: from_id.to_string(),
            to: next_id.to_string(),
        })
    }

    fn finish<IO: ConversationIo + ?Sized>(
        &mut self,
        io: &mut IO,
        termination: Termination,
    ) -> Result<Step, ConversationError> {
        if termination.reached_end() && !self.config.end_notice.is_empty() {
            io.write_line(&self.config.end_notice)?;
        }
        tracing::info!(steps = self.state.steps, reason = %termination, "Conversation terminated");
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.finish(termination.clone());
        }
        self.state.phase = Phase::Terminated(termination.clone());
        Ok(Step::Terminated(termination))
    }
}

/// Where a conversation goes after `from_id`, or how it ends there.
fn resolve_successor<'g>(
    graph: &'g FlowGraph,
    from_id: &str,
    from_node: &'g Node,
) -> Result<(&'g str, &'g Node), Termination> {
    let Some(next_id) = from_node.successor() else {
        return Err(Termination::Completed {
            last_node: from_id.to_string(),
        });
    };
    graph.get_entry(next_id).ok_or_else(|| {
        tracing::warn!(
            from = %from_id,
            missing = %next_id,
            "Successor node does not exist, ending conversation"
        );
        Termination::DanglingTransition {
            from: from_id.to_string(),
            missing: next_id.to_string(),
        }
    })
}

/// Normalizes one raw line of input before it is stored or substituted.
///
/// Surrounding whitespace, including the line terminator, is trimmed and the
/// rest is lower-cased. Whitespace inside the line is kept as typed, so an
/// all-blank line normalizes to the empty string.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().to_lowercase()
}
