//! Source formatting for generated Rust code.
//!
//! This module checks rendered text and rewrites it in canonical style:
//! - [`syntax`]: Classifies lines and validates identifiers, types and literals
//! - [`indenter`]: Computes indentation from block nesting and catches unbalanced braces
//! - [`whitespace`]: Collapses intra-line whitespace and applies the blank line policy
//! - [`patterns`]: Precompiled regex patterns for the emitted Rust subset
//!
//! Formatting happens entirely in memory; a rejection here aborts the run
//! before anything is written.

pub mod indenter;
pub mod patterns;
pub mod syntax;
pub mod whitespace;

use anyhow::{bail, Context};

pub use indenter::BlockIndenter;
pub use syntax::{check_hex_literal, check_identifier, classify_line, IntType, SourceLine};
pub use whitespace::{collapse_whitespace, BlankLinePolicy};

use crate::error::Result;

/// Default number of spaces per indent level
pub const DEFAULT_INDENT: usize = 4;

/// Reformat `text` into canonical style
///
/// Every line is classified and validated, re-emitted in canonical spacing and
/// indented by block depth with `indent` spaces per level. The result ends with
/// exactly one newline (or is empty when `text` has no content). Errors name the
/// offending line as `line N`.
pub fn format_source(text: &str, indent: usize) -> Result<String> {
    format_source_with(text, indent, |line_number| format!("line {line_number}"))
}

/// Like [`format_source`], with `label` naming a 1-based line in errors
pub fn format_source_with<F>(text: &str, indent: usize, label: F) -> Result<String>
where
    F: Fn(usize) -> String,
{
    let mut indenter = BlockIndenter::new(indent);
    let mut blanks = BlankLinePolicy::new();
    let mut output = String::with_capacity(text.len());
    // Outer attribute waiting for the item it applies to
    let mut pending_attribute: Option<usize> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_number = idx + 1;
        let line = classify_line(raw).with_context(|| label(line_number))?;

        if line == SourceLine::Blank {
            blanks.blank(indenter.depth());
            continue;
        }

        match &line {
            SourceLine::Attribute { inner: false, .. } => {
                pending_attribute.get_or_insert(line_number);
            }
            item if item.is_item() => pending_attribute = None,
            SourceLine::Close => {
                if let Some(attr_line) = pending_attribute {
                    bail!("{}: attribute is not followed by an item", label(attr_line));
                }
            }
            _ => {}
        }

        let depth_before = indenter.depth();
        let width = indenter
            .indent_for(&line)
            .with_context(|| label(line_number))?;
        // A closing brace belongs to the parent level
        let line_depth = if line == SourceLine::Close {
            indenter.depth()
        } else {
            depth_before
        };

        if blanks.before_line(line_depth) {
            output.push('\n');
        }
        output.push_str(&" ".repeat(width));
        output.push_str(&line.to_string());
        output.push('\n');
    }

    if let Some(attr_line) = pending_attribute {
        bail!("{}: attribute is not followed by an item", label(attr_line));
    }
    indenter.finish()?;

    Ok(output)
}
