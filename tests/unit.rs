//! Unit tests for core Kaiwa functionality.
mod common;
use kaiwa::interpreter::{DEFAULT_END_NOTICE, DEFAULT_START_NODE, normalize_input};
use kaiwa::prelude::*;

#[test]
fn test_node_builders_and_successor() {
    let node = Node::new("Hi {x}").with_next("Next").with_capture("k", "x");
    assert_eq!(node.successor(), Some("Next"));
    assert!(node.captures_input());

    let terminal = Node::new("Bye");
    assert_eq!(terminal.successor(), None);
    assert!(!terminal.captures_input());
}

#[test]
fn test_config_defaults() {
    let config = ConversationConfig::default();
    assert_eq!(config.start_node, DEFAULT_START_NODE);
    assert_eq!(config.start_node, "Inicio");
    assert_eq!(config.end_notice, DEFAULT_END_NOTICE);
    assert!(!config.retain_variables);
    assert!(!config.record_transcript);
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: ConversationConfig =
        serde_json::from_str(r#"{ "start_node": "Start", "retain_variables": true }"#).unwrap();
    assert_eq!(config.start_node, "Start");
    assert_eq!(config.end_notice, DEFAULT_END_NOTICE);
    assert!(config.retain_variables);
}

#[test]
fn test_normalize_input() {
    assert_eq!(normalize_input("  Olá MUNDO\n"), "olá mundo");
    assert_eq!(normalize_input("ÇÃO\r\n"), "ção");
    assert_eq!(normalize_input("\n"), "");
    assert_eq!(normalize_input(" \t \r\n"), "");
    assert_eq!(normalize_input("\tSão  Paulo \n"), "são  paulo");
}

#[test]
fn test_substitute_is_identity_without_matching_tokens() {
    let slots: CaptureSlots = [("a".to_string(), "name".to_string())].into_iter().collect();
    for template in ["", "plain text", "{other}", "{ name }", "{NAME}", "name"] {
        assert_eq!(substitute(template, &slots, "value"), template);
    }
}

#[test]
fn test_substitute_leaves_arguments_untouched() {
    let slots: CaptureSlots = [("a".to_string(), "name".to_string())].into_iter().collect();
    let before = slots.clone();
    let template = String::from("Hi {name}");
    let out = substitute(&template, &slots, "ana");
    assert_eq!(out, "Hi ana");
    assert_eq!(template, "Hi {name}");
    assert_eq!(slots, before);
}

#[test]
fn test_termination_display() {
    let completed = Termination::Completed {
        last_node: "Fim".to_string(),
    };
    let dangling = Termination::DanglingTransition {
        from: "A".to_string(),
        missing: "ghost".to_string(),
    };
    let closed = Termination::InputClosed {
        at_node: "B".to_string(),
    };
    assert_eq!(completed.to_string(), "conversation completed at 'Fim'");
    assert!(dangling.to_string().contains("ghost"));
    assert!(closed.to_string().contains("'B'"));
    assert!(completed.reached_end());
    assert!(dangling.reached_end());
    assert!(!closed.reached_end());
}

#[test]
fn test_termination_serializes_with_kind_tag() {
    let dangling = Termination::DanglingTransition {
        from: "A".to_string(),
        missing: "ghost".to_string(),
    };
    let json = serde_json::to_value(&dangling).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "dangling_transition", "from": "A", "missing": "ghost" })
    );
}

#[test]
fn test_error_display() {
    let err = FlowLoadError::JsonParseError("expected value".to_string());
    assert!(err.to_string().contains("expected value"));

    let err = ConfigurationError::StartNodeNotFound("Inicio".to_string());
    assert!(err.to_string().contains("Inicio"));

    let err: ConversationError = err.into();
    assert!(err.to_string().contains("Inicio"));

    let err: ConversationError = std::io::Error::other("disk gone").into();
    assert!(err.to_string().contains("disk gone"));

    let err = FlowConversionError::DuplicateNode("n1".to_string());
    assert!(err.to_string().contains("n1"));
}

#[test]
fn test_scripted_io_tracks_reads() {
    let mut io = ScriptedIo::new(["one"]);
    io.write_line("hello").unwrap();
    assert_eq!(io.read_line().unwrap().as_deref(), Some("one"));
    assert_eq!(io.read_line().unwrap(), None);
    assert_eq!(io.reads(), 1);
    assert_eq!(io.output(), ["hello"]);
}
