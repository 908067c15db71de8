use crate::flow::Node;
use ahash::AHashMap;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Why a conversation stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Termination {
    /// The last node had an empty successor.
    Completed { last_node: String },
    /// The successor named by `from` does not exist in the graph.
    ///
    /// Observably identical to `Completed`: the same end notice is shown and no
    /// error is raised. Kept separate so hosts can tell a broken edge apart.
    DanglingTransition { from: String, missing: String },
    /// The input boundary ran dry while waiting for an answer at `at_node`.
    ///
    /// Only reported for nodes with an existing successor. At a terminal or
    /// dangling node a closed input ends the conversation the usual way.
    InputClosed { at_node: String },
}

impl Termination {
    /// `true` for the two graph-driven endings, which show the end notice.
    pub fn reached_end(&self) -> bool {
        !matches!(self, Termination::InputClosed { .. })
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Completed { last_node } => {
                write!(f, "conversation completed at '{}'", last_node)
            }
            Termination::DanglingTransition { from, missing } => write!(
                f,
                "conversation ended at '{}': successor '{}' does not exist",
                from, missing
            ),
            Termination::InputClosed { at_node } => {
                write!(f, "input closed while waiting at '{}'", at_node)
            }
        }
    }
}

/// Where the state machine is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Active(String),
    Terminated(Termination),
}

/// The interpreter's mutable record for one conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationState {
    pub phase: Phase,
    /// The latest normalized answer.
    pub last_input: Option<String>,
    /// Every binding captured so far: placeholder name -> answer.
    pub variables: AHashMap<String, String>,
    /// Completed input reads.
    pub steps: usize,
}

impl ConversationState {
    pub(crate) fn new(start_node: &str) -> Self {
        Self {
            phase: Phase::Active(start_node.to_string()),
            last_input: None,
            variables: AHashMap::new(),
            steps: 0,
        }
    }

    pub fn current_node(&self) -> Option<&str> {
        match &self.phase {
            Phase::Active(id) => Some(id),
            Phase::Terminated(_) => None,
        }
    }

    pub fn termination(&self) -> Option<&Termination> {
        match &self.phase {
            Phase::Terminated(t) => Some(t),
            Phase::Active(_) => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated(_))
    }
}

/// A node as it will be shown on the next step.
///
/// The message borrows the stored template until a transition rewrites it, at
/// which point it owns the rendered copy. The graph itself is never patched.
#[derive(Debug, Clone)]
pub struct RenderedNode<'g> {
    pub id: &'g str,
    pub message: Cow<'g, str>,
    pub node: &'g Node,
}

impl<'g> RenderedNode<'g> {
    pub(crate) fn verbatim(id: &'g str, node: &'g Node) -> Self {
        Self {
            id,
            message: Cow::Borrowed(&node.message),
            node,
        }
    }

    /// `true` when the shown message differs from the stored template.
    pub fn is_rewritten(&self) -> bool {
        matches!(self.message, Cow::Owned(_))
    }
}

/// Outcome of a single `Conversation::step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Advanced { from: String, to: String },
    Terminated(Termination),
}
