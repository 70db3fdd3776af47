use crate::command::{CommandFactory, Flow, trim_line};
use crate::completion;
use crate::config::ShellConfig;
use crate::io_adapters::{LineReader, RustylineReader};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate, see `BuiltinCommand`.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Lifecycle of the read loop. `Terminated` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

/// Interactive command dispatcher with two-level tab completion.
///
/// The interpreter keeps a list of [`CommandFactory`] objects that are queried, in
/// order, with the trimmed input line. See [`Default`] for the built-in commands.
///
/// Example
/// ```
/// use readline_shell::{Flow, Interpreter};
/// let mut sh = Interpreter::default();
/// let mut out = Vec::new();
/// assert_eq!(sh.execute_line_with_output("show options", &mut out).unwrap(), Flow::Continue);
/// assert_eq!(String::from_utf8(out).unwrap(), "OPTION 1: X\nOPTION 2: Y\n\n");
/// ```
pub struct Interpreter {
    commands: Vec<Box<dyn CommandFactory>>,
    state: State,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            commands,
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Dispatch one raw input line, writing any output to `stdout`.
    ///
    /// Trailing spaces are stripped, then the line must equal a command name exactly.
    /// An empty line does nothing; an unrecognized one prints "Unknown command.".
    pub fn execute_line_with_output(&mut self, line: &str, stdout: &mut dyn Write) -> Result<Flow> {
        let line = trim_line(line);
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(line) {
                debug!(command = line, "dispatch");
                let flow = cmd.execute(stdout)?;
                if flow == Flow::Exit {
                    self.state = State::Terminated;
                }
                return Ok(flow);
            }
        }

        debug!(command = line, "unknown command");
        writeln!(stdout, "Unknown command.")?;
        writeln!(stdout)?;
        Ok(Flow::Continue)
    }

    /// Dispatch one raw input line to standard output.
    ///
    /// ```
    /// use readline_shell::{Flow, Interpreter, State};
    /// let mut sh = Interpreter::default();
    /// assert_eq!(sh.execute_line("").unwrap(), Flow::Continue);
    /// assert_eq!(sh.execute_line("exit  ").unwrap(), Flow::Exit);
    /// assert_eq!(sh.state(), State::Terminated);
    /// ```
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let mut stdout = std::io::stdout().lock();
        let flow = self.execute_line_with_output(line, &mut stdout)?;
        stdout.flush()?;
        Ok(flow)
    }

    /// Read-Eval-Print Loop over an arbitrary line reader.
    ///
    /// Registers the completion hook, then reads and dispatches lines until `exit` is
    /// entered or the reader reports end of input. Every line read is added to history.
    pub fn repl_with(&mut self, reader: &mut dyn LineReader, stdout: &mut dyn Write) -> Result<()> {
        let prompt = ShellConfig::global().prompt;
        reader.register_completer(completion::complete);

        while self.state == State::Running {
            let Some(line) = reader.read_line(prompt)? else {
                self.state = State::Terminated;
                break;
            };
            reader.add_history(&line)?;
            self.execute_line_with_output(&line, stdout)?;
            stdout.flush().context("can't flush output")?;
        }

        Ok(())
    }

    /// Run the interactive shell on the terminal.
    pub fn repl(&mut self) -> Result<()> {
        let mut reader = RustylineReader::new()?;
        info!("shell started");
        self.repl_with(&mut reader, &mut std::io::stdout())?;
        info!("shell terminated");
        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the built-in commands:
    /// `exit`, `help`, `show`, `show options`, `show info`.
    fn default() -> Self {
        use crate::builtin::*;
        Self::new(vec![
            Box::new(Factory::<Exit>::default()),
            Box::new(Factory::<Help>::default()),
            Box::new(Factory::<Show>::default()),
            Box::new(Factory::<ShowOptions>::default()),
            Box::new(Factory::<ShowInfo>::default()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::ScriptedReader;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run_script(lines: &[&str]) -> (Interpreter, ScriptedReader, String) {
        let mut sh = Interpreter::default();
        let mut reader = ScriptedReader::new(lines.iter().copied());
        let mut out = Vec::new();
        sh.repl_with(&mut reader, &mut out).unwrap();
        (sh, reader, String::from_utf8(out).unwrap())
    }

    #[rstest]
    #[case("sho")]
    #[case("foobar")]
    #[case("show  options")]
    #[case(" help")]
    #[case("HELP")]
    #[case("help\t")]
    #[case("show options extra")]
    #[case("exit now")]
    fn test_unknown_commands(#[case] line: &str) {
        let mut sh = Interpreter::default();
        let mut out = Vec::new();
        let flow = sh.execute_line_with_output(line, &mut out).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(String::from_utf8(out).unwrap(), "Unknown command.\n\n");
        assert_eq!(sh.state(), State::Running);
    }

    #[rstest]
    #[case("")]
    #[case("    ")]
    fn test_empty_line_is_noop(#[case] line: &str) {
        let mut sh = Interpreter::default();
        let mut out = Vec::new();
        let flow = sh.execute_line_with_output(line, &mut out).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(out.is_empty());
    }

    #[test]
    fn test_trailing_spaces_are_ignored() {
        let mut sh = Interpreter::default();
        let mut out = Vec::new();
        sh.execute_line_with_output("show options   ", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "OPTION 1: X\nOPTION 2: Y\n\n");
    }

    #[test]
    fn test_unknown_command_is_idempotent() {
        let (sh, _, out) = run_script(&["foobar", "foobar"]);
        assert_eq!(out, "Unknown command.\n\nUnknown command.\n\n");
        assert_eq!(sh.state(), State::Terminated);
    }

    #[test]
    fn test_exit_stops_reading() {
        let (sh, reader, out) = run_script(&["exit", "help"]);
        assert!(out.is_empty());
        assert_eq!(sh.state(), State::Terminated);
        assert_eq!(reader.prompts(), 1);
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.history(), &["exit".to_string()]);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let (sh, reader, out) = run_script(&["show"]);
        assert_eq!(out, "usage: show options\n       show info\n\n");
        assert_eq!(sh.state(), State::Terminated);
        assert_eq!(reader.prompts(), 2);
    }

    #[test]
    fn test_every_line_goes_to_history() {
        let (_, reader, _) = run_script(&["", "nope ", "show info", "exit"]);
        assert_eq!(
            reader.history(),
            &[
                String::new(),
                "nope ".to_string(),
                "show info".to_string(),
                "exit".to_string()
            ]
        );
    }

    #[test]
    fn test_repl_registers_completion() {
        let (_, reader, _) = run_script(&["exit"]);
        assert_eq!(reader.complete("h", "h"), Some(vec!["help"]));
        assert_eq!(reader.complete("o", "show o"), Some(vec!["options"]));
    }

    #[test]
    fn test_session_transcript() {
        let (_, _, out) = run_script(&["help", "show", "show options", "show info", "", "foobar", "exit"]);
        assert!(out.starts_with("Simple shell using readline"));
        assert!(out.contains("usage: show options\n       show info\n\n"));
        assert!(out.contains("OPTION 1: X\nOPTION 2: Y\n\n"));
        assert!(out.contains("complete after tab completing an initial command\n\n"));
        assert!(out.ends_with("Unknown command.\n\n"));
    }
}
