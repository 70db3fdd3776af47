use anyhow::Result;
use std::io::Write;

/// What the read loop should do after a command has run.
///
/// `Exit` is the only way a command can move the shell out of its running state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading lines.
    Continue,
    /// Stop the loop; the process then exits with status 0.
    Exit,
}

/// Object-safe trait for any command that can be executed by the shell.
///
/// This is implemented by built-ins via a blanket impl.
pub trait ExecutableCommand {
    /// Executes the command, writing its output to `stdout`.
    fn execute(self: Box<Self>, stdout: &mut dyn Write) -> Result<Flow>;
}

/// Factory that tries to create a command from a trimmed input line.
///
/// Returns `None` when the factory doesn't recognize the line. Matching is exact:
/// a factory never accepts a prefix or a differently spaced spelling of its command.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided line.
    fn try_create(&self, line: &str) -> Option<Box<dyn ExecutableCommand>>;
}

/// Strip trailing space characters from a raw input line.
///
/// Only `' '` is removed, and only at the end. Leading spaces, tabs and runs of
/// spaces between words are kept, so `"show  options"` stays distinct from
/// `"show options"`.
pub fn trim_line(line: &str) -> &str {
    line.trim_end_matches(' ')
}
