//! ANSI palette and line rendering for check reports.
//!
//! Every pass/fail/skip event in the crate is one formatted console line.
//! Rendering is split from printing so tests can assert on the exact strings
//! without capturing stdout.

use std::fmt::Display;

// ANSI color codes
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const NORMAL_GREEN: &str = "\x1b[0;32m";
pub const BOLD_RED: &str = "\x1b[1;31m";
pub const NORMAL_RED: &str = "\x1b[0;31m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const NORMAL_YELLOW: &str = "\x1b[0;33m";
/// Reset to the terminal's default style.
pub const DEFAULT: &str = "\x1b[0m";

/// Result of a single assertion or wrapped test body.
///
/// Assertion mismatches are reported through this value and a printed line,
/// never through a panic. Only a panic inside the function under test
/// escapes a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Failed)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::Skipped)
    }

    /// The (bold, normal) color pair for this outcome.
    pub(crate) fn colors(self) -> (&'static str, &'static str) {
        match self {
            Outcome::Passed => (BOLD_GREEN, NORMAL_GREEN),
            Outcome::Failed => (BOLD_RED, NORMAL_RED),
            Outcome::Skipped => (BOLD_YELLOW, NORMAL_YELLOW),
        }
    }
}

/// Render one check report line: `{name}() Test {title}: {message}`.
pub(crate) fn check_line(outcome: Outcome, name: &str, title: &str, message: &str) -> String {
    let (bold, normal) = outcome.colors();
    format!("{bold}{name}(){normal} Test {title}: {message}{DEFAULT}")
}

/// Render a function-level banner: `{name}(): {message}`.
pub(crate) fn banner(outcome: Outcome, name: &str, message: &str) -> String {
    let (bold, normal) = outcome.colors();
    format!("{bold}{name}(){normal}: {message}{DEFAULT}")
}

/// Banner printed before a panic from the function under test is rethrown.
pub(crate) fn invocation_failure_line(name: &str, title: &str) -> String {
    format!(
        "{BOLD_RED}{name}(){NORMAL_RED}, Test {title}: \
         Test failed, see error message below{DEFAULT}"
    )
}

/// Render `expected {expected}, instead received {received}` in normal red.
pub fn format_err_msg(expected: impl Display, received: impl Display) -> String {
    format!("{NORMAL_RED}expected {expected}, instead received {received}{DEFAULT}")
}
