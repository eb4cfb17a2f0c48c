//! Progress and error reporting.
//!
//! A [`Reporter`] is created once in `main` and passed by reference into the
//! locator and installer, rather than going through a process-wide logger.

use colored::Colorize;

/// Writes status lines for the user.
///
/// Result lines go to stdout; debug and error lines go to stderr. Debug
/// lines are suppressed unless verbose mode is on.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    /// Create a reporter; `verbose` enables debug output.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a debug line to stderr, if verbose.
    pub fn debug(&self, msg: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{} {}", "debug:".dimmed(), msg.as_ref());
        }
    }

    /// Print a user-facing result line to stdout.
    pub fn info(&self, msg: impl AsRef<str>) {
        println!("{}", msg.as_ref());
    }

    /// Print an error line to stderr.
    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!("{} {}", "error:".red().bold(), msg.as_ref());
    }
}
