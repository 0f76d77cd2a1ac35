//! Shell error taxonomy.
//!
//! Every failure in the core is one of these variants, rendered as a plain
//! string in the transcript. Errors never abort the session: the interpreter
//! converts them to output and stays ready for the next submission.

use thiserror::Error;

/// Recoverable shell errors, shown to the user as command output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Missing path target.
    #[error("{0}: No such file or directory")]
    NotFound(String),

    /// Tried to descend into or cd onto a file.
    #[error("{0}: Not a directory")]
    NotADirectory(String),

    /// Tried to read a folder as a file.
    #[error("{0}: Is a directory")]
    IsADirectory(String),

    /// Creation collision in the current folder.
    #[error("cannot create '{0}': entry already exists")]
    AlreadyExists(String),

    /// Missing or malformed argument.
    #[error("{0}")]
    InvalidOperand(String),

    /// Command name not present in the registry.
    #[error("command not found: {0}")]
    UnknownCommand(String),

    /// Clear sentinel inside a multi-stage pipeline.
    #[error("{0}: cannot be used in a pipeline")]
    PipelineMisuse(String),
}
