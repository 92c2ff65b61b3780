//! Terminal status output for the asciify CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs, written to
//! stderr. Stdout is reserved for the rendered art.

use std::io::{self, IsTerminal, Write};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Status,
    Info,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Status => GREEN,
            Level::Info => CYAN,
            Level::Error => RED,
        }
    }
}

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal. In quiet mode only error
/// lines are printed.
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// Suppress status and info lines.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print a status line with a green bold verb.
    /// e.g. "  Converting photo.png"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(Level::Status, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(Level::Info, verb, message);
    }

    /// Print an error line with a red bold verb. Printed even when quiet.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(Level::Error, verb, message);
    }

    fn print_line(&self, level: Level, verb: &str, message: &str) {
        if let Some(line) = self.format_line(level, verb, message) {
            let _ = writeln!(io::stderr().lock(), "{line}");
        }
    }

    /// The line to print for a message, or `None` when quiet suppresses it.
    fn format_line(&self, level: Level, verb: &str, message: &str) -> Option<String> {
        if self.quiet && level != Level::Error {
            return None;
        }

        if self.color {
            let color = level.color();
            Some(format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"))
        } else {
            Some(format!("{verb:>VERB_WIDTH$} {message}"))
        }
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
