use std::sync::OnceLock;

/// Top-level commands offered by tab completion, in completion order.
pub const CORE_COMMANDS: &[&str] = &["exit", "show", "help"];

/// Sub-commands completed once the buffer starts with [`SHOW_PREFIX`].
pub const SHOW_COMMANDS: &[&str] = &["options", "info"];

/// Buffer prefix that switches completion over to [`SHOW_COMMANDS`].
pub const SHOW_PREFIX: &str = "show";

/// Prompt printed before every line read.
pub const PROMPT: &str = "shell > ";

/// Read-only settings of the interactive shell.
///
/// The shell has no user-facing configuration: a single instance is built on first
/// use and shared for the lifetime of the process. See [`ShellConfig::global`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Prompt shown by the line reader.
    pub prompt: &'static str,
    /// Table consulted when completing the first word.
    pub core_commands: &'static [&'static str],
    /// Table consulted when the buffer begins with `show_prefix`.
    pub show_commands: &'static [&'static str],
    /// Literal prefix selecting `show_commands`.
    pub show_prefix: &'static str,
}

impl ShellConfig {
    /// Process-wide configuration, initialized once.
    pub fn global() -> &'static ShellConfig {
        static CONFIG: OnceLock<ShellConfig> = OnceLock::new();
        CONFIG.get_or_init(ShellConfig::default)
    }

    /// Pick the table that governs completion for `buffer`.
    ///
    /// The comparison is byte-wise on the first bytes of the whole buffer, so
    /// `"showx"` selects the sub-command table too.
    pub fn active_table(&self, buffer: &str) -> &'static [&'static str] {
        if buffer.starts_with(self.show_prefix) {
            self.show_commands
        } else {
            self.core_commands
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT,
            core_commands: CORE_COMMANDS,
            show_commands: SHOW_COMMANDS,
            show_prefix: SHOW_PREFIX,
        }
    }
}
