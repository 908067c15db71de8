use super::definition::{FlowGraph, Node};
use crate::error::FlowConversionError;
use ahash::AHashSet;

/// A trait for custom data models that can be converted into a Kaiwa `FlowGraph`.
///
/// Authoring tools rarely store dialogue in exactly the `{ id: node }` JSON shape
/// that `FlowGraph::from_json` reads. Implementing this trait on your own structs
/// provides the translation layer instead.
///
/// # Example
///
/// ```rust,no_run
/// use kaiwa::prelude::*;
///
/// struct Line { id: String, text: String, then: Option<String> }
/// struct Script { lines: Vec<Line> }
///
/// impl IntoFlow for Script {
///     fn into_flow(self) -> std::result::Result<FlowGraph, FlowConversionError> {
///         self.lines
///             .into_iter()
///             .map(|line| {
///                 let node = Node::new(line.text).with_next(line.then.unwrap_or_default());
///                 (line.id, node)
///             })
///             .collect::<Vec<_>>()
///             .into_flow()
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a conversation flow.
    fn into_flow(self) -> Result<FlowGraph, FlowConversionError>;
}

impl IntoFlow for FlowGraph {
    fn into_flow(self) -> Result<FlowGraph, FlowConversionError> {
        Ok(self)
    }
}

impl IntoFlow for Vec<(String, Node)> {
    fn into_flow(self) -> Result<FlowGraph, FlowConversionError> {
        let mut seen = AHashSet::with_capacity(self.len());
        for (id, _) in &self {
            if !seen.insert(id.as_str()) {
                return Err(FlowConversionError::DuplicateNode(id.clone()));
            }
        }
        Ok(self.into_iter().collect())
    }
}
