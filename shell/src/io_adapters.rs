use crate::completion::{CompletionHook, ShellHelper};
use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use std::collections::VecDeque;
use tracing::debug;

/// Source of input lines with history and a pluggable completion hook.
///
/// `read_line` returns `Ok(None)` once input is exhausted; the read loop treats that
/// as a normal way to stop.
pub trait LineReader {
    /// Block until the user submits a line.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Append an accepted line to the in-memory history.
    ///
    /// Repeated lines are kept. The terminal reader cannot store empty lines:
    /// rustyline's history discards them.
    fn add_history(&mut self, line: &str) -> Result<()>;

    /// Install the function consulted when the user presses tab.
    fn register_completer(&mut self, hook: CompletionHook);
}

/// Terminal line reader backed by [`rustyline`].
pub struct RustylineReader {
    editor: Editor<ShellHelper, DefaultHistory>,
}

impl RustylineReader {
    /// Create an editor that lists every candidate on an ambiguous tab, like readline.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .auto_add_history(false)
            .history_ignore_dups(false)?
            .build();
        let editor = Editor::with_config(config).context("can't initialize line editor")?;
        Ok(Self { editor })
    }
}

impl LineReader for RustylineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => {
                debug!("end of input");
                Ok(None)
            }
            Err(ReadlineError::Interrupted) => {
                debug!("interrupted");
                Ok(None)
            }
            Err(err) => Err(err).context("can't read line"),
        }
    }

    fn add_history(&mut self, line: &str) -> Result<()> {
        self.editor
            .add_history_entry(line)
            .context("can't add history entry")?;
        Ok(())
    }

    fn register_completer(&mut self, hook: CompletionHook) {
        self.editor.set_helper(Some(ShellHelper::new(hook)));
    }
}

/// Memory-backed line reader.
///
/// Replays a fixed list of lines and then reports end of input. History and the
/// registered hook are kept so callers can inspect them afterwards.
#[derive(Default)]
pub struct ScriptedReader {
    lines: VecDeque<String>,
    history: Vec<String>,
    prompts: usize,
    hook: Option<CompletionHook>,
}

impl ScriptedReader {
    /// Create a reader that will return `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Lines appended to history so far.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Number of times a prompt was shown, including the one answered by end of input.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Lines that were never read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Simulate a tab press through the registered hook.
    ///
    /// Returns `None` when no hook was registered.
    pub fn complete(&self, text: &str, buffer: &str) -> Option<Vec<&'static str>> {
        self.hook.map(|hook| hook(text, buffer))
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        self.prompts += 1;
        Ok(self.lines.pop_front())
    }

    fn add_history(&mut self, line: &str) -> Result<()> {
        self.history.push(line.to_string());
        Ok(())
    }

    fn register_completer(&mut self, hook: CompletionHook) {
        self.hook = Some(hook);
    }
}
