//! Command registry and execution.
//!
//! Every builtin is a [`CommandSpec`]: name, usage, description, manual
//! block and handler. The registry is a `const` slice, read-only for the
//! process lifetime; `help`, `man`, tab completion and the fuzzy matcher
//! all iterate it in declaration order.

mod execute;
mod result;
mod suggest;

pub use execute::execute;
pub use result::CommandResult;
pub use suggest::closest_command;

use crate::core::error::ShellError;
use crate::core::session::ShellSession;

/// What a handler produces on success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text fed to the next pipeline stage, or shown if this is the last.
    Text(String),
    /// Clear-screen sentinel; only valid as a whole single-stage pipeline.
    Clear,
}

impl CommandOutput {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

/// Handler contract: arguments, piped input from the previous stage
/// (empty for the first), and the session to consult or mutate.
pub type Handler = fn(&mut ShellSession, &[String], &str) -> Result<CommandOutput, ShellError>;

/// Static registry entry for one builtin.
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub man: &'static str,
    pub handler: Handler,
}

/// Commands whose first argument completes against current-folder entries.
pub const PATH_COMMANDS: &[&str] = &["cd", "cat", "rm"];

/// Commands whose first argument completes against command names.
pub const COMMAND_ARG_COMMANDS: &[&str] = &["man"];

/// All builtins, in the order `help` and completion present them.
pub const REGISTRY: &[CommandSpec] = &[
    CommandSpec {
        name: "ls",
        usage: "ls [-a] [-l]",
        description: "list files and folders",
        man: "\
NAME
    ls - list directory contents

SYNOPSIS
    ls [-a] [-l]

DESCRIPTION
    Lists the entries of the current folder in creation order.
    Folders are shown with a trailing slash.

    -a    include hidden entries (names starting with '.')
    -l    long format: permissions, owner, size in bytes, name",
        handler: execute::ls,
    },
    CommandSpec {
        name: "cd",
        usage: "cd [dir]",
        description: "change directory",
        man: "\
NAME
    cd - change the working directory

SYNOPSIS
    cd [dir]

DESCRIPTION
    Without an argument, returns to the root folder. 'cd ..' moves up
    one level and is a no-op at the root. Paths starting with '/' are
    resolved from the root, anything else from the current folder.",
        handler: execute::cd,
    },
    CommandSpec {
        name: "pwd",
        usage: "pwd",
        description: "print working directory",
        man: "\
NAME
    pwd - print the working directory

SYNOPSIS
    pwd

DESCRIPTION
    Prints the absolute path of the current folder, '/' at the root.",
        handler: execute::pwd,
    },
    CommandSpec {
        name: "cat",
        usage: "cat <file>",
        description: "print file content",
        man: "\
NAME
    cat - print file content

SYNOPSIS
    cat <file>

DESCRIPTION
    Prints the content of a file. Fails with 'Is a directory' for
    folders and 'No such file or directory' for missing paths.",
        handler: execute::cat,
    },
    CommandSpec {
        name: "mkdir",
        usage: "mkdir <name>",
        description: "create a folder",
        man: "\
NAME
    mkdir - create a folder

SYNOPSIS
    mkdir <name>

DESCRIPTION
    Creates an empty folder in the current directory. The name must be
    plain (no '/') and must not collide with an existing entry.",
        handler: execute::mkdir,
    },
    CommandSpec {
        name: "touch",
        usage: "touch <name>",
        description: "create an empty file",
        man: "\
NAME
    touch - create an empty file

SYNOPSIS
    touch <name>

DESCRIPTION
    Creates an empty file in the current directory. Touching an
    existing entry is a silent no-op.",
        handler: execute::touch,
    },
    CommandSpec {
        name: "rm",
        usage: "rm <name>",
        description: "delete a file or folder",
        man: "\
NAME
    rm - delete an entry

SYNOPSIS
    rm <name>

DESCRIPTION
    Deletes a file or folder (recursively) by name or path. Removing
    the folder you are standing in drops you back at the root.",
        handler: execute::rm,
    },
    CommandSpec {
        name: "grep",
        usage: "grep <pattern>",
        description: "filter piped lines",
        man: "\
NAME
    grep - filter lines by substring

SYNOPSIS
    <command> | grep <pattern>

DESCRIPTION
    Keeps the lines of the piped input that contain the literal
    pattern. Without piped input it produces nothing.",
        handler: execute::grep,
    },
    CommandSpec {
        name: "man",
        usage: "man <command>",
        description: "show a command's manual",
        man: "\
NAME
    man - show a command's manual

SYNOPSIS
    man <command>

DESCRIPTION
    Prints the manual block for a builtin. Yes, this page is aware
    of itself.",
        handler: execute::man,
    },
    CommandSpec {
        name: "help",
        usage: "help",
        description: "list available commands",
        man: "\
NAME
    help - list available commands

SYNOPSIS
    help

DESCRIPTION
    Prints one line per builtin with its usage and description.",
        handler: execute::help,
    },
    CommandSpec {
        name: "fortune",
        usage: "fortune",
        description: "print a random fortune",
        man: "\
NAME
    fortune - print a random fortune

SYNOPSIS
    fortune

DESCRIPTION
    Prints one saying from a fixed pool. Re-run until satisfied.",
        handler: execute::fortune,
    },
    CommandSpec {
        name: "about",
        usage: "about",
        description: "who runs this site",
        man: "\
NAME
    about - who runs this site

SYNOPSIS
    about

DESCRIPTION
    A short introduction to the person behind this terminal.",
        handler: execute::about,
    },
    CommandSpec {
        name: "contact",
        usage: "contact",
        description: "how to reach me",
        man: "\
NAME
    contact - how to reach me

SYNOPSIS
    contact

DESCRIPTION
    Email and profiles. The inbox is the fastest route.",
        handler: execute::contact,
    },
    CommandSpec {
        name: "clear",
        usage: "clear",
        description: "clear the screen",
        man: "\
NAME
    clear - clear the screen

SYNOPSIS
    clear

DESCRIPTION
    Empties the transcript. Cannot be combined with pipes.",
        handler: execute::clear,
    },
];

/// Look up a builtin by exact name.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

/// Registered command names in registry order.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|spec| spec.name)
}
