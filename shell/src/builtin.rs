use crate::command::{CommandFactory, ExecutableCommand, Flow};
use crate::interpreter::Factory;
use anyhow::Result;
use std::io::Write;

/// Built-in commands known to the shell at compile time.
///
/// A builtin is selected when the trimmed input line equals [`BuiltinCommand::name`]
/// exactly and is executed in-process.
pub(crate) trait BuiltinCommand: Sized + Default {
    /// Full command line that selects this builtin, e.g. "help" or "show info".
    fn name() -> &'static str;

    /// Executes the command, writing its output to `stdout`.
    fn execute(self, stdout: &mut dyn Write) -> Result<Flow>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, stdout: &mut dyn Write) -> Result<Flow> {
        BuiltinCommand::execute(*self, stdout)
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, line: &str) -> Option<Box<dyn ExecutableCommand>> {
        if line == T::name() {
            Some(Box::new(T::default()))
        } else {
            None
        }
    }
}

/// Print the table of core commands.
#[derive(Default)]
pub struct Help;

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn execute(self, stdout: &mut dyn Write) -> Result<Flow> {
        writeln!(
            stdout,
            "Simple shell using readline with multiple levels of tab completion"
        )?;
        writeln!(stdout)?;
        writeln!(stdout, "Core Commands")?;
        writeln!(stdout, "=============")?;
        writeln!(stdout)?;
        writeln!(stdout, "{:4}{:<11}{:<25}", "", "Command", "Description")?;
        writeln!(stdout, "{:4}{:<11}{:<25}", "", "-------", "-----------")?;
        for (command, description) in [
            ("help", "Shows this menu"),
            ("show", "Shows options and information"),
            ("exit", "Exits this shell"),
        ] {
            writeln!(stdout, "{:4}{:<7}{:4}{:<25}", "", command, "", description)?;
        }
        writeln!(stdout)?;
        Ok(Flow::Continue)
    }
}

/// Print usage of the `show` sub-commands.
#[derive(Default)]
pub struct Show;

impl BuiltinCommand for Show {
    fn name() -> &'static str {
        "show"
    }

    fn execute(self, stdout: &mut dyn Write) -> Result<Flow> {
        writeln!(stdout, "usage: show options")?;
        writeln!(stdout, "       show info")?;
        writeln!(stdout)?;
        Ok(Flow::Continue)
    }
}

#[derive(Default)]
pub struct ShowOptions;

impl BuiltinCommand for ShowOptions {
    fn name() -> &'static str {
        "show options"
    }

    fn execute(self, stdout: &mut dyn Write) -> Result<Flow> {
        writeln!(stdout, "OPTION 1: X")?;
        writeln!(stdout, "OPTION 2: Y")?;
        writeln!(stdout)?;
        Ok(Flow::Continue)
    }
}

#[derive(Default)]
pub struct ShowInfo;

impl BuiltinCommand for ShowInfo {
    fn name() -> &'static str {
        "show info"
    }

    fn execute(self, stdout: &mut dyn Write) -> Result<Flow> {
        writeln!(stdout, "This is just an example command where you can tab")?;
        writeln!(stdout, "complete after tab completing an initial command")?;
        writeln!(stdout)?;
        Ok(Flow::Continue)
    }
}

/// Leave the shell. Prints nothing.
#[derive(Default)]
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, _stdout: &mut dyn Write) -> Result<Flow> {
        Ok(Flow::Exit)
    }
}
