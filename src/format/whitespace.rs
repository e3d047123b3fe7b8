//! Whitespace normalization for generated sources
//!
//! Two concerns live here:
//! 1. `collapse_whitespace`: Intra-line spacing (runs of whitespace become one space)
//! 2. [`BlankLinePolicy`]: Which blank lines survive between items

use std::borrow::Cow;

use super::patterns::WHITESPACE_RUN_RE;

/// Collapse every run of whitespace into a single space
#[must_use]
pub fn collapse_whitespace(line: &str) -> Cow<'_, str> {
    WHITESPACE_RUN_RE.replace_all(line, " ")
}

/// Decides which blank lines are kept
///
/// Blank lines inside blocks are dropped, consecutive blank lines at top
/// level collapse into one, and blank lines at the start and end of the file
/// disappear.
#[derive(Debug, Default)]
pub struct BlankLinePolicy {
    /// A blank line was seen and not yet emitted
    pending: bool,
    /// Something other than a blank line has been emitted
    started: bool,
}

impl BlankLinePolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a blank line seen at `depth`
    pub fn blank(&mut self, depth: usize) {
        if depth == 0 && self.started {
            self.pending = true;
        }
    }

    /// Called before a non-blank line at `depth` is emitted
    ///
    /// Returns true if a single blank line should be written first.
    pub fn before_line(&mut self, depth: usize) -> bool {
        let emit = self.pending && depth == 0;
        self.pending = false;
        self.started = true;
        emit
    }
}
