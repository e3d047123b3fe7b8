/// `LineStream` - Reads codepoint listings line by line
///
/// This module handles:
/// - Reading physical lines with line numbers (bytes that are not UTF-8 are
///   replaced, so only the affected line can be rejected)
/// - Splitting each line into a (name, code) pair
/// - Tolerating blank and malformed lines (or rejecting them in strict mode)
use std::borrow::Cow;
use std::fmt;
use std::io::BufRead;

use anyhow::{bail, Context};

use super::names::normalize_name;
use crate::document::{Document, Entry, Origin};
use crate::error::Result;

/// Separator between the name and code tokens
const TOKEN_SEPARATOR: char = ' ';

/// Why a non-blank line produced no entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Line did not split into exactly two tokens (holds the actual count)
    TokenCount(usize),
    /// Name normalized to an empty identifier
    EmptyName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TokenCount(n) => write!(
                f,
                "expected `<name> <hex>` separated by one space, found {n} token{}",
                if *n == 1 { "" } else { "s" }
            ),
            SkipReason::EmptyName => write!(f, "name is empty after normalization"),
        }
    }
}

/// A line that was ignored, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Result of parsing a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty after trimming
    Blank,
    Entry(Entry),
    Skipped(SkipReason),
}

/// Output of the line parser: the document plus everything it dropped
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub document: Document,
    pub skipped: Vec<SkippedLine>,
}

/// Parse one input line
#[must_use]
pub fn parse_line(line: &str) -> LineOutcome {
    parse_numbered_line(line, None)
}

/// Parse a line, recording its position on the entry when known
fn parse_numbered_line(line: &str, line_number: Option<usize>) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let parts: Vec<&str> = line.split(TOKEN_SEPARATOR).collect();
    let [raw_name, raw_code] = parts.as_slice() else {
        return LineOutcome::Skipped(SkipReason::TokenCount(parts.len()));
    };

    let name = normalize_name(raw_name);
    if name.is_empty() {
        return LineOutcome::Skipped(SkipReason::EmptyName);
    }

    let entry = Entry::new(name, raw_code);
    LineOutcome::Entry(match line_number {
        Some(line_number) => entry.with_origin(Origin {
            line_number,
            raw_name: (*raw_name).to_string(),
        }),
        None => entry,
    })
}

/// `LineStream` yields numbered physical lines from a reader
pub struct LineStream<R: BufRead> {
    reader: R,
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Read the next physical line along with its 1-based number
    ///
    /// Returns None at EOF. Invalid UTF-8 is replaced with U+FFFD; only
    /// failures of the underlying reader are errors.
    pub fn next_line(&mut self) -> Result<Option<(usize, Cow<'_, str>)>> {
        self.buffer.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buffer)
            .with_context(|| format!("failed to read input line {}", self.line_number + 1))?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some((self.line_number, String::from_utf8_lossy(&self.buffer))))
    }
}

/// Parse a whole listing into a [`ParseReport`]
///
/// In strict mode the first skipped line aborts the run. Blank lines are
/// never an error.
pub fn parse_document<R: BufRead>(reader: R, strict: bool) -> Result<ParseReport> {
    let mut stream = LineStream::new(reader);
    let mut report = ParseReport::default();

    while let Some((line_number, line)) = stream.next_line()? {
        match parse_numbered_line(&line, Some(line_number)) {
            LineOutcome::Blank => {}
            LineOutcome::Entry(entry) => report.document.push(entry),
            LineOutcome::Skipped(reason) => {
                if strict {
                    bail!("input line {line_number}: {reason}");
                }
                report.skipped.push(SkippedLine {
                    line_number,
                    reason,
                });
            }
        }
    }

    Ok(report)
}
