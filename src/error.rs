//! Diagnostics reported by the shell.
//!
//! None of these stop the read-dispatch loop: they are written to the output sink
//! as a single line and the session carries on. The `Display` text of each variant
//! is exactly what the user sees.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// The first token of a line names no registered command.
    #[error("Command \"{0}\" not found!")]
    UnknownCommand(String),
    /// `help <name>` for a command registered without usage text.
    #[error("No help found for command \"{0}\"")]
    NoUsageAvailable(String),
    /// `help <name>` for a name that is not registered.
    #[error("Command \"{0}\" not found!")]
    UnknownHelpTarget(String),
}
