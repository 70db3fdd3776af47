//! A tiny interactive shell with two-level tab completion and history.
//!
//! Lines are read through a [`LineReader`](io_adapters::LineReader) (backed by
//! [`rustyline`] on a terminal), trimmed of trailing spaces and matched exactly against
//! a fixed set of built-in commands: `help`, `show`, `show options`, `show info` and
//! `exit`. Pressing tab completes the first word from the core command table, or the
//! second word from the `show` sub-command table once the line starts with "show".
//!
//! The main entry point is [`Interpreter`]. The public modules [`command`],
//! [`completion`], [`config`] and [`io_adapters`] expose the dispatch traits, the
//! completion hook, the static command tables and the line reader abstraction.

mod builtin;
pub mod command;
pub mod completion;
pub mod config;
mod interpreter;
pub mod io_adapters;

/// Outcome of a dispatched command, see [`command::Flow`].
pub use command::Flow;
/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{Interpreter, State};
