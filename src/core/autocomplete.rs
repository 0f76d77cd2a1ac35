//! Tab completion for command names and paths.
//!
//! Only the active pipeline segment (everything after the last `|`) is
//! considered. Candidates are returned in registry or folder order; the
//! caller applies one by replacing the last whitespace-delimited token.

use crate::core::commands::{COMMAND_ARG_COMMANDS, PATH_COMMANDS, command_names};
use crate::core::session::ShellSession;

/// Completion candidates for a partially typed line.
pub fn completions(session: &ShellSession, input: &str) -> Vec<String> {
    let active = input.rsplit('|').next().unwrap_or(input);
    let trailing_space = active.ends_with(char::is_whitespace);
    let tokens: Vec<&str> = active.split_whitespace().collect();

    match tokens.as_slice() {
        // Nothing typed yet: offer every command.
        [] => command_names().map(str::to_string).collect(),
        // Completing the command itself.
        [word] if !trailing_space => command_names()
            .filter(|name| name.starts_with(word))
            .map(str::to_string)
            .collect(),
        // Command typed, argument not started.
        [command] => argument_candidates(session, command, ""),
        // Completing the first argument.
        [command, arg] if !trailing_space => argument_candidates(session, command, arg),
        _ => Vec::new(),
    }
}

fn argument_candidates(session: &ShellSession, command: &str, prefix: &str) -> Vec<String> {
    if PATH_COMMANDS.contains(&command) {
        session
            .list_entries(true)
            .into_iter()
            .map(|entry| entry.name)
            .filter(|name| name.starts_with(prefix))
            .collect()
    } else if COMMAND_ARG_COMMANDS.contains(&command) {
        command_names()
            .filter(|name| name.starts_with(prefix))
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    }
}

/// Replace the last whitespace-delimited token of `input` with `candidate`.
pub fn apply_completion(input: &str, candidate: &str) -> String {
    match input
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
    {
        Some((idx, c)) => format!("{}{}", &input[..idx + c.len_utf8()], candidate),
        None => candidate.to_string(),
    }
}
