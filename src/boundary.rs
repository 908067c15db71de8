use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Prompt shown before each read on the process console.
pub const DEFAULT_PROMPT: &str = "Usuário: ";

/// The text channel a conversation talks through.
///
/// The interpreter only ever writes whole lines and reads one line per step.
pub trait ConversationIo {
    /// Displays one line of text to the user.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Blocks for one line of input. Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// A line-oriented boundary over any buffered reader and writer.
pub struct TextIo<R, W> {
    reader: R,
    writer: W,
    prompt: Option<String>,
}

impl<R: BufRead, W: Write> TextIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            prompt: None,
        }
    }

    /// Writes `prompt` (without a newline) before every read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl TextIo<io::StdinLock<'static>, io::Stdout> {
    /// Binds the process console, prompting with `DEFAULT_PROMPT`.
    pub fn stdio() -> Self {
        TextIo::new(io::stdin().lock(), io::stdout()).with_prompt(DEFAULT_PROMPT)
    }
}

impl<R: BufRead, W: Write> ConversationIo for TextIo<R, W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(prompt) = &self.prompt {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;
        }
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// An in-memory boundary fed from a fixed list of answers.
///
/// Everything the conversation writes is kept in `output`, which makes it the
/// natural choice for tests and for embedding the interpreter in other hosts.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIo {
    inputs: VecDeque<String>,
    output: Vec<String>,
    reads: usize,
}

impl ScriptedIo {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            reads: 0,
        }
    }

    /// Lines written so far, oldest first.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn into_output(self) -> Vec<String> {
        self.output
    }

    /// How many lines have been consumed.
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl ConversationIo for ScriptedIo {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let next = self.inputs.pop_front();
        if next.is_some() {
            self.reads += 1;
        }
        Ok(next)
    }
}

impl<T: ConversationIo + ?Sized> ConversationIo for &mut T {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}
