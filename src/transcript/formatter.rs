use super::Transcript;
use std::fmt::Write;

/// Formats transcripts into human-readable logs.
pub struct TranscriptFormatter;

impl TranscriptFormatter {
    /// Renders every turn as a bot line followed by the user's answer.
    pub fn format(transcript: &Transcript) -> String {
        let mut out = String::new();
        for turn in &transcript.turns {
            let _ = writeln!(out, "[{}] bot: {}", turn.node_id, turn.message);
            match &turn.input {
                Some(input) => {
                    let _ = writeln!(out, "[{}] user: {}", turn.node_id, input);
                }
                None => {
                    let _ = writeln!(out, "[{}] user: <no input>", turn.node_id);
                }
            }
        }
        if let Some(termination) = &transcript.termination {
            let _ = writeln!(out, "-- {}", termination);
        }
        out
    }
}
