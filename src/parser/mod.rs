//! Codepoint listing parser.
//!
//! This module turns the raw input text into a [`Document`](crate::document::Document):
//! - [`LineStream`]: Reads numbered physical lines, failing fast on I/O errors
//! - [`parse_line`]: Splits a line into name and code, or classifies it as blank/skipped
//! - [`normalize_name`]: Converts `snake_case` names into TitleCase identifiers
//!
//! Malformed lines are tolerated: they are recorded in the [`ParseReport`]
//! instead of aborting, unless strict mode is requested.

pub mod names;
pub mod stream;

pub use names::normalize_name;
pub use stream::{
    parse_document, parse_line, LineOutcome, LineStream, ParseReport, SkipReason, SkippedLine,
};
