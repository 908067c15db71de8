//! Common test utilities for building conversation flows.
use kaiwa::prelude::*;

/// Scenario flow: the answer at `Start` fills `{name}` in `End`.
///
/// `Start` -> `End` (terminal)
#[allow(dead_code)]
pub fn create_greeting_flow() -> FlowGraph {
    vec![
        (
            "Start".to_string(),
            Node::new("What is your name?")
                .with_next("End")
                .with_capture("a", "name"),
        ),
        ("End".to_string(), Node::new("Hello {name}")),
    ]
    .into_iter()
    .collect()
}

/// A straight line of `len` nodes, `n0` -> `n1` -> ... -> `n{len-1}` (terminal).
#[allow(dead_code)]
pub fn create_linear_flow(len: usize) -> FlowGraph {
    (0..len)
        .map(|i| {
            let next = if i + 1 < len {
                format!("n{}", i + 1)
            } else {
                String::new()
            };
            (format!("n{}", i), Node::new(format!("message {}", i)).with_next(next))
        })
        .collect()
}

/// A two-node cycle with no way out: `A` -> `B` -> `A`.
///
/// `A` captures into `{who}`, which `B` shows; `A`'s own template also carries
/// `{who}` so that any leaked rewrite would be visible on the next visit.
#[allow(dead_code)]
pub fn create_cycle_flow(capturing: bool) -> FlowGraph {
    let mut a = Node::new("A asks about {who}").with_next("B");
    if capturing {
        a = a.with_capture("k", "who");
    }
    vec![
        ("A".to_string(), a),
        ("B".to_string(), Node::new("B heard {who}").with_next("A")),
    ]
    .into_iter()
    .collect()
}

/// The authored flow format, with every optional shape the loader accepts.
#[allow(dead_code)]
pub const AUTHORED_FLOW_JSON: &str = r#"{
    "Inicio": {
        "botMessage": "Olá! Qual é o seu nome?",
        "nextNode": "Saudacao",
        "variableResponse": { "nome": "nome" }
    },
    "Saudacao": {
        "botMessage": "Prazer, {nome}! Quer continuar?",
        "nextNode": "Fim",
        "variableResponse": null
    },
    "Fim": {
        "botMessage": "Até logo, {nome}.",
        "nextNode": ""
    }
}"#;

/// Path to the sample flow shipped with the repository.
#[allow(dead_code)]
pub fn sample_flow_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/conversation_flow.json")
}
