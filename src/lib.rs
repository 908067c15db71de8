//! # Kaiwa - Scripted Conversation Flow Interpreter
//!
//! **Kaiwa** drives menu-free text conversations from a directed graph of dialogue
//! nodes. Each node shows a message, waits for one line of input and hands over to
//! its successor. A node can also *capture* the answer it receives and bind it to
//! `{placeholder}` tokens in the next node's message.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Flow**: Parse an authored flow with `FlowGraph::from_json` (or
//!     `from_file`), restore a binary snapshot with `FlowGraph::from_bytes`, or
//!     implement `IntoFlow` on your own authoring format.
//! 2.  **Configure**: Use `Conversation::builder` to pick the start node, the end
//!     notice and the optional variable retention and transcript recording.
//! 3.  **Run**: Drive the conversation through any `ConversationIo` boundary. The
//!     console is `TextIo::stdio()`; tests and embedders use `ScriptedIo`.
//!
//! The graph is never mutated while a conversation runs, so one loaded flow can
//! back any number of conversations at once.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kaiwa::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let flow = FlowGraph::from_json(
//!         r#"{
//!             "Inicio": {
//!                 "botMessage": "Olá! Qual é o seu nome?",
//!                 "nextNode": "Saudacao",
//!                 "variableResponse": { "nome": "nome" }
//!             },
//!             "Saudacao": { "botMessage": "Prazer, {nome}!", "nextNode": "" }
//!         }"#,
//!     )?;
//!
//!     let mut conversation = Conversation::builder(&flow).build()?;
//!     let mut io = ScriptedIo::new(["Ana", "tchau"]);
//!     let termination = conversation.run(&mut io)?;
//!
//!     assert_eq!(
//!         io.output(),
//!         ["Olá! Qual é o seu nome?", "Prazer, ana!", "Interação encerrada"]
//!     );
//!     println!("{}", termination);
//!     Ok(())
//! }
//! ```

pub mod boundary;
pub mod error;
pub mod flow;
pub mod interpreter;
pub mod prelude;
pub mod substitution;
pub mod transcript;

#[cfg(feature = "python-bindings")]
mod python;
