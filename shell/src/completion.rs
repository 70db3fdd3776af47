use crate::config::ShellConfig;
use rustyline::completion::{self, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use tracing::trace;

/// Completion hook handed to a [`LineReader`](crate::io_adapters::LineReader).
///
/// Called with the word being completed and the whole input buffer; returns the
/// candidates in table order.
pub type CompletionHook = fn(text: &str, buffer: &str) -> Vec<&'static str>;

/// Lazily yield every entry of the active table that starts with `text`.
///
/// The active table is the sub-command table when `buffer` starts with "show",
/// otherwise the core command table. Each call rescans from the start of the table.
pub fn candidates<'a>(text: &'a str, buffer: &str) -> impl Iterator<Item = &'static str> + 'a {
    ShellConfig::global()
        .active_table(buffer)
        .iter()
        .copied()
        .filter(move |name| name.starts_with(text))
}

/// Default [`CompletionHook`]: all [`candidates`] collected in order.
pub fn complete(text: &str, buffer: &str) -> Vec<&'static str> {
    let found: Vec<&'static str> = candidates(text, buffer).collect();
    trace!(text, buffer, ?found, "completion");
    found
}

/// Word boundary for completion. Whitespace only: readline's default set also
/// breaks on `"'@$><=;|&{(`, none of which occur in the command tables.
fn is_break_char(c: char) -> bool {
    c.is_whitespace()
}

/// rustyline helper that routes tab completion through a [`CompletionHook`].
pub struct ShellHelper {
    hook: CompletionHook,
}

impl ShellHelper {
    pub fn new(hook: CompletionHook) -> Self {
        Self { hook }
    }
}

impl completion::Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, word) = completion::extract_word(line, pos, None, is_break_char);
        let pairs = (self.hook)(word, line)
            .into_iter()
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{name} "),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}

impl rustyline::Helper for ShellHelper {}
