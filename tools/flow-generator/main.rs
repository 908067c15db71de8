use clap::Parser;
use kaiwa::interpreter::DEFAULT_START_NODE;
use kaiwa::prelude::{FlowGraph, Node};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;
use tracing_subscriber::EnvFilter;

/// A CLI tool to generate sample conversation flows for the Kaiwa interpreter
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// Number of nodes in the generated conversation
    #[arg(short, long, default_value_t = 8)]
    nodes: usize,

    /// Probability that a node captures its answer for the next message
    #[arg(long, default_value_t = 0.5)]
    capture_ratio: f64,

    /// End the flow with a transition to a node that does not exist
    #[arg(long)]
    dangling: bool,
}

const TOPICS: [&str; 6] = ["nome", "cidade", "cor", "comida", "time", "animal"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.capture_ratio) {
        eprintln!(
            "Error: --capture-ratio ({}) must be between 0 and 1",
            cli.capture_ratio
        );
        std::process::exit(1);
    }

    tracing::info!(nodes = cli.nodes, dangling = cli.dangling, "Generating conversation flow");
    let flow = generate_flow(&mut rng, &cli);

    fs::write(&cli.output, flow.to_json_pretty()?)?;

    println!(
        "Successfully generated a {}-node flow and saved it to '{}'",
        flow.len(),
        cli.output
    );

    Ok(())
}

fn node_id(index: usize) -> String {
    if index == 0 {
        DEFAULT_START_NODE.to_string()
    } else {
        format!("passo_{}", index)
    }
}

/// Builds a linear, acyclic flow. Capturing nodes ask about a topic and the
/// following node echoes the answer through a placeholder.
fn generate_flow(rng: &mut ThreadRng, cli: &Cli) -> FlowGraph {
    let mut pending_placeholder: Option<&str> = None;
    let mut nodes = Vec::with_capacity(cli.nodes);

    for index in 0..cli.nodes {
        let is_last = index + 1 == cli.nodes;
        let captures = !is_last && rng.random_bool(cli.capture_ratio);
        let topic = TOPICS[rng.random_range(0..TOPICS.len())];

        let mut message = match pending_placeholder.take() {
            Some(placeholder) => format!("Anotado: {{{}}}. ", placeholder),
            None => String::new(),
        };
        if captures {
            message.push_str(&format!("Qual é o seu {} favorito?", topic));
        } else {
            message.push_str(&format!("Etapa {} de {}.", index + 1, cli.nodes));
        }

        let next = if !is_last {
            node_id(index + 1)
        } else if cli.dangling {
            "inexistente".to_string()
        } else {
            String::new()
        };

        let mut node = Node::new(message).with_next(next);
        if captures {
            node = node.with_capture(topic, topic);
            pending_placeholder = Some(topic);
        }
        nodes.push((node_id(index), node));
    }

    nodes.into_iter().collect()
}
