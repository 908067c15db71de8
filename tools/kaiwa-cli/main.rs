use clap::Parser;
use kaiwa::boundary::DEFAULT_PROMPT;
use kaiwa::interpreter::{DEFAULT_END_NOTICE, DEFAULT_START_NODE};
use kaiwa::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Plays a scripted conversation flow on the console
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the conversation flow (JSON, or a `.kaiwa` snapshot)
    flow_path: Option<String>,

    /// Identifier of the node the conversation starts from
    #[arg(short, long, default_value = DEFAULT_START_NODE)]
    start: String,

    /// Notice shown when the conversation ends (empty to disable)
    #[arg(long, default_value = DEFAULT_END_NOTICE)]
    end_notice: String,

    /// Prompt written before every answer
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Keep every captured answer available to all later messages
    #[arg(long)]
    retain_variables: bool,

    /// Write a transcript of the conversation to this path when it ends
    #[arg(long)]
    transcript: Option<String>,

    /// Write a binary snapshot of the loaded flow to this path and exit
    #[arg(long)]
    snapshot: Option<String>,

    /// Run in interactive mode to be prompted for the flow path
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let mut cli = Cli::parse();

    if cli.human {
        cli.flow_path = Some(prompt_for_input(
            "Enter conversation flow path",
            Some("data/conversation_flow.json"),
        ));
    }
    let flow_path = cli.flow_path.clone().unwrap_or_else(|| {
        exit_with_error("A flow path is required in non-interactive mode.");
    });

    // --- 1. Flow Loading ---
    let load_start = Instant::now();
    let flow = FlowGraph::from_path(&flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load conversation flow '{}': {}",
            flow_path, e
        ))
    });
    tracing::info!(
        path = %flow_path,
        nodes = flow.len(),
        elapsed = ?load_start.elapsed(),
        "Conversation flow loaded"
    );

    // --- 2. Snapshot Export ---
    if let Some(snapshot_path) = &cli.snapshot {
        flow.save_snapshot(snapshot_path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write snapshot: {}", e))
        });
        println!(
            "Wrote snapshot of {} nodes to '{}'",
            flow.len(),
            snapshot_path
        );
        return;
    }

    // --- 3. Conversation ---
    let mut conversation = Conversation::builder(&flow)
        .start_node(cli.start.as_str())
        .end_notice(cli.end_notice.as_str())
        .retain_variables(cli.retain_variables)
        .record_transcript(cli.transcript.is_some())
        .build()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let stdin = io::stdin();
    let mut console = TextIo::new(stdin.lock(), io::stdout()).with_prompt(cli.prompt.as_str());
    let termination = conversation
        .run(&mut console)
        .unwrap_or_else(|e| exit_with_error(&format!("Conversation failed: {}", e)));

    if let Termination::DanglingTransition { from, missing } = &termination {
        tracing::warn!(%from, %missing, "Flow has a transition to a missing node");
    }

    // --- 4. Transcript ---
    if let (Some(path), Some(transcript)) = (&cli.transcript, conversation.transcript()) {
        if let Err(e) = fs::write(path, TranscriptFormatter::format(transcript)) {
            exit_with_error(&format!("Failed to write transcript '{}': {}", path, e));
        }
        tracing::info!(path = %path, turns = transcript.len(), "Transcript written");
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
