//! Pipeline dispatch and the builtin handlers.

use crate::config;
use crate::core::error::ShellError;
use crate::core::parser::parse_pipeline;
use crate::core::session::{EntryInfo, ShellSession};
use crate::utils::random;

use super::{CommandOutput, CommandResult, closest_command, lookup};

/// Execute one submitted line against the session.
///
/// All stage names are resolved before any handler runs, so an unknown
/// command anywhere in the pipeline produces only its error, with no
/// partial output and no state mutation from earlier stages.
pub fn execute(session: &mut ShellSession, input: &str) -> CommandResult {
    let pipeline = parse_pipeline(input);
    if pipeline.is_empty() {
        return CommandResult::Output(String::new());
    }

    let mut stages = Vec::with_capacity(pipeline.len());
    for command in &pipeline {
        match lookup(&command.name) {
            Some(spec) => stages.push((spec, command)),
            None => return CommandResult::Error(unknown_command(&command.name)),
        }
    }

    let multi = stages.len() > 1;
    let mut piped = String::new();
    for (spec, command) in stages {
        match (spec.handler)(session, &command.args, &piped) {
            Ok(CommandOutput::Clear) if multi => {
                return CommandResult::Error(
                    ShellError::PipelineMisuse(spec.name.to_string()).to_string(),
                );
            }
            Ok(CommandOutput::Clear) => return CommandResult::Clear,
            Ok(CommandOutput::Text(output)) => piped = output,
            Err(err) => return CommandResult::Error(format!("{}: {}", spec.name, err)),
        }
    }
    CommandResult::Output(piped)
}

fn unknown_command(name: &str) -> String {
    let base = ShellError::UnknownCommand(name.to_string()).to_string();
    match closest_command(name) {
        Some(suggestion) => format!("{}. Did you mean '{}'?", base, suggestion),
        None => format!("{}. Type 'help' for available commands.", base),
    }
}

fn require_operand<'a>(args: &'a [String], what: &str) -> Result<&'a str, ShellError> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| ShellError::InvalidOperand(format!("missing {}", what)))
}

// =============================================================================
// Builtin Handlers
// =============================================================================

pub(super) fn ls(
    session: &mut ShellSession,
    args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    let mut include_hidden = false;
    let mut long = false;
    for arg in args {
        let Some(flags) = arg.strip_prefix('-') else {
            // Bare operands are ignored; ls always lists the current folder.
            continue;
        };
        for flag in flags.chars() {
            match flag {
                'a' => include_hidden = true,
                'l' => long = true,
                other => {
                    return Err(ShellError::InvalidOperand(format!(
                        "invalid option -- '{}'",
                        other
                    )));
                }
            }
        }
    }

    let entries = session.list_entries(include_hidden);
    if entries.is_empty() {
        return Ok(CommandOutput::text("(empty)"));
    }
    let lines: Vec<String> = if long {
        entries.iter().map(long_entry).collect()
    } else {
        entries.iter().map(short_entry).collect()
    };
    Ok(CommandOutput::text(lines.join("\n")))
}

fn short_entry(entry: &EntryInfo) -> String {
    if entry.is_folder {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    }
}

fn long_entry(entry: &EntryInfo) -> String {
    let permissions = if entry.is_folder {
        "drwxr-xr-x"
    } else {
        "-rw-r--r--"
    };
    format!(
        "{} {} {:>6} {}",
        permissions,
        config::LS_OWNER,
        entry.size,
        entry.name
    )
}

pub(super) fn cd(
    session: &mut ShellSession,
    args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    session.change_directory(args.first().map(String::as_str))?;
    Ok(CommandOutput::text(""))
}

pub(super) fn pwd(
    session: &mut ShellSession,
    _args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    Ok(CommandOutput::text(session.prompt_path()))
}

pub(super) fn cat(
    session: &mut ShellSession,
    args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    let path = require_operand(args, "file operand")?;
    Ok(CommandOutput::Text(session.read_file(path)?))
}

pub(super) fn mkdir(
    session: &mut ShellSession,
    args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    session.create_folder(require_operand(args, "operand")?)?;
    Ok(CommandOutput::text(""))
}

pub(super) fn touch(
    session: &mut ShellSession,
    args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    session.create_file(require_operand(args, "operand")?)?;
    Ok(CommandOutput::text(""))
}

pub(super) fn rm(
    session: &mut ShellSession,
    args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    session.remove(require_operand(args, "operand")?)?;
    Ok(CommandOutput::text(""))
}

pub(super) fn grep(
    _session: &mut ShellSession,
    args: &[String],
    piped: &str,
) -> Result<CommandOutput, ShellError> {
    let pattern = require_operand(args, "pattern")?;
    if piped.is_empty() {
        return Ok(CommandOutput::text(""));
    }
    let kept: Vec<&str> = piped
        .lines()
        .filter(|line| line.contains(pattern))
        .collect();
    Ok(CommandOutput::text(kept.join("\n")))
}

pub(super) fn man(
    _session: &mut ShellSession,
    args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    let name = require_operand(args, "command name")?;
    match lookup(name) {
        Some(spec) => Ok(CommandOutput::text(spec.man)),
        None => Err(ShellError::InvalidOperand(format!(
            "No manual entry for {}",
            name
        ))),
    }
}

pub(super) fn help(
    _session: &mut ShellSession,
    _args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    let lines: Vec<String> = super::REGISTRY
        .iter()
        .map(|spec| {
            format!(
                "{:<width$} {}",
                spec.usage,
                spec.description,
                width = config::HELP_USAGE_WIDTH
            )
        })
        .collect();
    Ok(CommandOutput::text(lines.join("\n")))
}

pub(super) fn fortune(
    _session: &mut ShellSession,
    _args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    let pool = config::FORTUNES;
    Ok(CommandOutput::text(pool[random::random_index(pool.len())]))
}

pub(super) fn about(
    _session: &mut ShellSession,
    _args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    Ok(CommandOutput::text(config::ABOUT_TEXT.trim_end()))
}

pub(super) fn contact(
    _session: &mut ShellSession,
    _args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    Ok(CommandOutput::text(config::CONTACT_TEXT.trim_end()))
}

pub(super) fn clear(
    _session: &mut ShellSession,
    _args: &[String],
    _piped: &str,
) -> Result<CommandOutput, ShellError> {
    Ok(CommandOutput::Clear)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filesystem::VirtualFs;

    fn empty_session() -> ShellSession {
        ShellSession::with_fs(VirtualFs::new())
    }

    fn output(result: CommandResult) -> String {
        match result {
            CommandResult::Output(text) => text,
            other => panic!("expected output, got {:?}", other),
        }
    }

    fn error(result: CommandResult) -> String {
        match result {
            CommandResult::Error(text) => text,
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_input_is_silent() {
        let mut s = ShellSession::new();
        assert_eq!(execute(&mut s, ""), CommandResult::Output(String::new()));
        assert_eq!(execute(&mut s, " | "), CommandResult::Output(String::new()));
    }

    #[test]
    fn test_ls_short_format() {
        let mut s = ShellSession::new();
        let text = output(execute(&mut s, "ls"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["articles/", "projects/", "resume.txt"]);
    }

    #[test]
    fn test_ls_all_shows_hidden() {
        let mut s = ShellSession::new();
        let text = output(execute(&mut s, "ls -a"));
        assert!(text.lines().any(|l| l == ".plan"));
    }

    #[test]
    fn test_ls_long_format() {
        let mut s = ShellSession::new();
        let text = output(execute(&mut s, "ls -l"));
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("drwxr-xr-x"));
        assert!(first.contains(config::LS_OWNER));
        assert!(first.ends_with("articles"));
        // Folders report size 0.
        assert!(first.contains(" 0 "));
    }

    #[test]
    fn test_ls_combined_flags() {
        let mut s = ShellSession::new();
        let text = output(execute(&mut s, "ls -la"));
        assert!(text.lines().any(|l| l.ends_with(".plan")));
        assert!(text.starts_with('d') || text.starts_with('-'));
    }

    #[test]
    fn test_ls_unknown_flag() {
        let mut s = ShellSession::new();
        let text = error(execute(&mut s, "ls -z"));
        assert_eq!(text, "ls: invalid option -- 'z'");
    }

    #[test]
    fn test_ls_empty_folder_sentinel() {
        let mut s = empty_session();
        execute(&mut s, "touch only");
        execute(&mut s, "rm only");
        assert_eq!(output(execute(&mut s, "ls")), "(empty)");
    }

    #[test]
    fn test_pwd_matches_prompt() {
        let mut s = ShellSession::new();
        execute(&mut s, "cd articles");
        assert_eq!(output(execute(&mut s, "pwd")), s.prompt_path());
        assert_eq!(s.prompt_path(), "/articles");
    }

    #[test]
    fn test_cd_success_is_silent() {
        let mut s = ShellSession::new();
        assert_eq!(output(execute(&mut s, "cd projects")), "");
    }

    #[test]
    fn test_cd_errors() {
        let mut s = ShellSession::new();
        assert_eq!(
            error(execute(&mut s, "cd resume.txt")),
            "cd: resume.txt: Not a directory"
        );
        assert_eq!(
            error(execute(&mut s, "cd missing")),
            "cd: missing: No such file or directory"
        );
    }

    #[test]
    fn test_touch_then_cat_is_empty() {
        let mut s = empty_session();
        execute(&mut s, "touch foo");
        assert_eq!(output(execute(&mut s, "cat foo")), "");
    }

    #[test]
    fn test_cat_on_folder() {
        let mut s = empty_session();
        execute(&mut s, "mkdir bar");
        assert_eq!(error(execute(&mut s, "cat bar")), "cat: bar: Is a directory");
    }

    #[test]
    fn test_cat_missing_operand() {
        let mut s = ShellSession::new();
        assert_eq!(
            error(execute(&mut s, "cat")),
            "cat: missing file operand"
        );
    }

    #[test]
    fn test_mkdir_duplicate() {
        let mut s = empty_session();
        execute(&mut s, "mkdir docs");
        assert_eq!(
            error(execute(&mut s, "mkdir docs")),
            "mkdir: cannot create 'docs': entry already exists"
        );
    }

    #[test]
    fn test_rm_missing() {
        let mut s = empty_session();
        assert_eq!(
            error(execute(&mut s, "rm ghost")),
            "rm: ghost: No such file or directory"
        );
    }

    #[test]
    fn test_pipeline_grep_preserves_order() {
        let mut s = empty_session();
        execute(&mut s, "touch box");
        execute(&mut s, "touch foo");
        execute(&mut s, "touch xray");
        assert_eq!(output(execute(&mut s, "ls | grep x")), "box\nxray");
    }

    #[test]
    fn test_pipeline_grep_chain() {
        let mut s = ShellSession::new();
        execute(&mut s, "cd articles");
        let text = output(execute(&mut s, "ls | grep txt | grep react"));
        assert_eq!(text, "react.txt");
    }

    #[test]
    fn test_grep_without_piped_input_is_empty() {
        let mut s = ShellSession::new();
        assert_eq!(output(execute(&mut s, "grep foo")), "");
    }

    #[test]
    fn test_grep_missing_pattern() {
        let mut s = ShellSession::new();
        assert_eq!(error(execute(&mut s, "grep")), "grep: missing pattern");
    }

    #[test]
    fn test_grep_is_literal_and_case_sensitive() {
        let mut s = empty_session();
        execute(&mut s, "touch README");
        execute(&mut s, "touch readme");
        assert_eq!(output(execute(&mut s, "ls | grep READ")), "README");
    }

    #[test]
    fn test_clear_alone_propagates() {
        let mut s = ShellSession::new();
        assert_eq!(execute(&mut s, "clear"), CommandResult::Clear);
    }

    #[test]
    fn test_clear_in_pipeline_is_misuse() {
        let mut s = ShellSession::new();
        assert_eq!(
            error(execute(&mut s, "clear | grep x")),
            "clear: cannot be used in a pipeline"
        );
        assert_eq!(
            error(execute(&mut s, "ls | clear")),
            "clear: cannot be used in a pipeline"
        );
    }

    #[test]
    fn test_unknown_command_with_suggestion() {
        let mut s = ShellSession::new();
        let text = error(execute(&mut s, "clr"));
        assert_eq!(text, "command not found: clr. Did you mean 'clear'?");
    }

    #[test]
    fn test_unknown_command_without_suggestion() {
        let mut s = ShellSession::new();
        let text = error(execute(&mut s, "bootstrap"));
        assert_eq!(
            text,
            "command not found: bootstrap. Type 'help' for available commands."
        );
    }

    #[test]
    fn test_unknown_later_stage_runs_nothing() {
        let mut s = empty_session();
        let text = error(execute(&mut s, "mkdir zzz | nosuchcmd"));
        assert!(text.starts_with("command not found: nosuchcmd"));
        // The earlier stage never ran.
        assert_eq!(output(execute(&mut s, "ls")), "(empty)");
    }

    #[test]
    fn test_help_lists_every_builtin() {
        let mut s = ShellSession::new();
        let text = output(execute(&mut s, "help"));
        assert_eq!(text.lines().count(), super::super::REGISTRY.len());
        for spec in super::super::REGISTRY {
            assert!(text.lines().any(|l| l.starts_with(spec.usage)));
        }
    }

    #[test]
    fn test_help_columns_align() {
        let mut s = ShellSession::new();
        let text = output(execute(&mut s, "help"));
        for line in text.lines() {
            // Description starts after the fixed usage column.
            assert!(line.len() > config::HELP_USAGE_WIDTH);
            assert_eq!(line.as_bytes()[config::HELP_USAGE_WIDTH], b' ');
        }
    }

    #[test]
    fn test_man_known_command() {
        let mut s = ShellSession::new();
        let text = output(execute(&mut s, "man ls"));
        assert!(text.starts_with("NAME"));
        assert!(text.contains("ls - list directory contents"));
    }

    #[test]
    fn test_man_unknown_command() {
        let mut s = ShellSession::new();
        assert_eq!(
            error(execute(&mut s, "man frobnicate")),
            "man: No manual entry for frobnicate"
        );
    }

    #[test]
    fn test_fortune_draws_from_pool() {
        let mut s = ShellSession::new();
        for _ in 0..8 {
            let text = output(execute(&mut s, "fortune"));
            assert!(config::FORTUNES.contains(&text.as_str()));
        }
    }

    #[test]
    fn test_about_and_contact_are_static() {
        let mut s = ShellSession::new();
        assert_eq!(
            output(execute(&mut s, "about")),
            config::ABOUT_TEXT.trim_end()
        );
        assert_eq!(
            output(execute(&mut s, "contact")),
            config::CONTACT_TEXT.trim_end()
        );
    }

    #[test]
    fn test_errors_leave_session_usable() {
        let mut s = ShellSession::new();
        let _ = execute(&mut s, "cd missing");
        let _ = execute(&mut s, "cat articles");
        let _ = execute(&mut s, "frobnicate");
        assert_eq!(output(execute(&mut s, "pwd")), "/");
        assert!(!output(execute(&mut s, "ls")).is_empty());
    }
}
