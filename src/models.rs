// src/models.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of ways a command can fail. Every variant maps to exactly
/// one fixed user-facing message; the REPL prints it and keeps looping, so
/// none of these is ever fatal to the interpreter itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong arity for a builtin.
    #[error("{}", t!("error.invalid_argument_number"))]
    InvalidArgumentNumber,
    /// An argument was present but semantically malformed (e.g. text where
    /// an integer PID or priority was required).
    #[error("{}", t!("error.invalid_argument"))]
    InvalidArgument,
    /// No builtin matched. Internal routing signal: the dispatcher consumes
    /// it to fall back to an external launch, so the user normally never
    /// sees this message.
    #[error("{}", t!("error.unknown_command"))]
    UnknownCommand,
    /// The target path is missing or not a regular readable file.
    #[error("{}", t!("error.invalid_file_path"))]
    InvalidFilePath,
    /// Spawning the configured external editor failed.
    #[error("{}", t!("error.unable_to_open_editor"))]
    UnableToOpenEditor,
    /// The OS refused to create a new process.
    #[error("{}", t!("error.fork_failure"))]
    ForkFailure,
    /// The child process could not begin executing the requested program.
    #[error("{}", t!("error.invalid_process_input"))]
    InvalidProcessInput,
    /// The referenced handle is not in the registry.
    #[error("{}", t!("error.invalid_pid"))]
    InvalidPid,
}

/// On-disk configuration, loaded from `config.toml` in the user config
/// directory. Every field is optional; absent fields fall back to the
/// defaults in `constants.rs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Override for the decorative prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Program launched by the `edit` builtin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}
