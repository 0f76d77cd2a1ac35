//! Application configuration.
//!
//! Centralizes the constants used throughout the application. Longer text
//! assets are loaded at compile time with `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner shown above the terminal.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Body of the `about` command.
pub const ABOUT_TEXT: &str = include_str!("../assets/text/about.txt");

/// Body of the `contact` command.
pub const CONTACT_TEXT: &str = include_str!("../assets/text/contact.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the terminal header.
pub const APP_NAME: &str = "elliot@portfolio";

/// Lines printed into the transcript on startup.
pub const WELCOME_LINES: &[&str] = &[
    "Welcome to my portfolio!",
    "Type \"help\" to see available commands.",
    "",
];

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key holding the command history as a JSON string array.
pub const HISTORY_STORAGE_KEY: &str = "terminal-history";

// =============================================================================
// Listing Format
// =============================================================================

/// Owner token shown in `ls -l` output.
pub const LS_OWNER: &str = "elliot";

/// Column width for the usage string in `help` output.
pub const HELP_USAGE_WIDTH: usize = 16;

// =============================================================================
// Fortune Pool
// =============================================================================

/// Fixed pool the `fortune` command draws from.
pub const FORTUNES: &[&str] = &[
    "Weeks of coding can save you hours of planning.",
    "There is no place like 127.0.0.1.",
    "A shipped side project beats ten perfect ideas.",
    "It's not a bug, it's an undocumented feature.",
    "First, solve the problem. Then, write the code.",
    "Deleted code is debugged code.",
];

// =============================================================================
// Seed Filesystem Content
// =============================================================================

pub const RESUME: &str = "Elliot Anderson\nWeb Developer\nSkills: React, Node.js, Laravel, Go";

pub const PLAN: &str = "- rewrite the terminal core in Rust  [done]\n- write up the wasm build pipeline\n- answer recruiter emails (eventually)";

pub const ARTICLE_REACT: &str = "Rendering Lists in React Without Tears\n\nKeys are not optional decoration. Give every row a stable identity and\nthe reconciler stops fighting you. This article walks through the three\nmistakes I keep seeing in code reviews, and what to do instead.";

pub const ARTICLE_RUST_WASM: &str = "Shipping Rust to the Browser\n\nNotes from porting this site's terminal from JavaScript to Rust and\nWebAssembly: what the borrow checker caught that the old code missed,\nand where the wasm bundle size actually comes from.";

pub const PROJECT_TERMFOLIO: &str = "termfolio\n\nThis site. A simulated shell with an in-memory filesystem, pipes, tab\ncompletion and a typo corrector, compiled to WebAssembly.";

pub const PROJECT_PRICEWATCH: &str = "pricewatch\n\nA small Go service that tracks grocery prices across three local\nstores and emails a weekly diff. Running on a Raspberry Pi since 2023.";
