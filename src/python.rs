use crate::boundary::ScriptedIo;
use crate::flow::{CaptureSlots, FlowGraph};
use crate::interpreter::Conversation;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::HashMap;

/// The result of one scripted conversation, handed to Python as a dict.
struct SessionOutcome {
    output: Vec<String>,
    termination: String,
    completed: bool,
    variables: HashMap<String, String>,
}

impl<'py> IntoPyObject<'py> for SessionOutcome {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("output", self.output)?;
        dict.set_item("termination", self.termination)?;
        dict.set_item("completed", self.completed)?;
        dict.set_item("variables", self.variables)?;
        Ok(dict)
    }
}

/// A loaded conversation flow.
///
/// The flow is parsed once on construction. Each call to `run` plays a fresh
/// conversation against it, so a single instance can serve many sessions.
#[pyclass(name = "Kaiwa")]
struct KaiwaPy {
    graph: FlowGraph,
}

#[pymethods]
impl KaiwaPy {
    /// Parses a conversation flow.
    ///
    /// Args:
    ///     flow_json (str): A JSON object keyed by node identifier, each value
    ///         carrying "botMessage", "nextNode" and optionally "variableResponse".
    ///
    /// Raises:
    ///     ValueError: If the JSON is not a well-formed flow.
    #[new]
    fn new(flow_json: &str) -> PyResult<Self> {
        let graph = FlowGraph::from_json(flow_json)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok(KaiwaPy { graph })
    }

    /// Plays a conversation, answering each prompt with the next item of `inputs`.
    ///
    /// Args:
    ///     inputs (list[str]): The user's answers, in order. The conversation
    ///         stops early when they run out.
    ///     start_node (str | None): Overrides the default start node "Inicio".
    ///
    /// Returns:
    ///     dict: "output" (list[str]) with every line shown, "termination" (str)
    ///         describing why it stopped, "completed" (bool) which is false only
    ///         when the inputs ran out, and "variables" (dict[str, str]).
    ///
    /// Raises:
    ///     ValueError: If the start node does not exist.
    ///     RuntimeError: If the conversation fails while running.
    #[pyo3(signature = (inputs, start_node=None))]
    fn run(&self, inputs: Vec<String>, start_node: Option<String>) -> PyResult<SessionOutcome> {
        let mut builder = Conversation::builder(&self.graph);
        if let Some(start) = start_node {
            builder = builder.start_node(start);
        }
        let mut conversation = builder
            .build()
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;

        let mut io = ScriptedIo::new(inputs);
        let termination = conversation
            .run(&mut io)
            .map_err(|e| PyErr::new::<PyRuntimeError, _>(e.to_string()))?;

        Ok(SessionOutcome {
            output: io.into_output(),
            termination: termination.to_string(),
            completed: termination.reached_end(),
            variables: conversation.state().variables.clone().into_iter().collect(),
        })
    }

    /// Sorted identifiers of every node in the flow.
    fn node_ids(&self) -> Vec<String> {
        self.graph
            .node_ids()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Replaces every `{name}` listed among the values of `slots` with `captured`.
#[pyfunction(name = "substitute")]
fn substitute_py(template: &str, slots: HashMap<String, String>, captured: &str) -> String {
    let slots: CaptureSlots = slots.into_iter().collect();
    crate::substitution::substitute(template, &slots, captured)
}

/// A scripted conversation flow interpreter.
///
/// This module provides Python bindings to the Kaiwa Rust library, letting hosts
/// load a dialogue graph once and replay conversations against it.
#[pymodule]
fn kaiwa(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<KaiwaPy>()?;
    m.add_function(wrap_pyfunction!(substitute_py, m)?)?;
    Ok(())
}
