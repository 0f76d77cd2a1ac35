//! Core business logic: the command interpreter and the virtual filesystem.
//!
//! Everything here is pure with respect to the browser: state lives in a
//! [`ShellSession`] passed by reference, and every module is testable on
//! the host target. Only [`history`] touches web storage, behind helpers
//! that degrade gracefully when it is unavailable.

pub mod autocomplete;
pub mod commands;
pub mod error;
pub mod filesystem;
pub mod history;
pub mod parser;
pub mod session;

pub use autocomplete::{apply_completion, completions};
pub use commands::{CommandResult, execute};
pub use error::ShellError;
pub use session::ShellSession;
