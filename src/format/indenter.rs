/// `BlockIndenter` - Brace-depth indentation tracker
///
/// Uses a stack of open block names to compute the indentation of each line
/// and to detect unbalanced braces.
use anyhow::bail;

use super::syntax::SourceLine;
use crate::error::Result;

/// `BlockIndenter` tracks block nesting and calculates indentation
#[derive(Debug)]
pub struct BlockIndenter {
    /// Names of the open blocks, innermost last
    open_blocks: Vec<String>,
    /// Spaces per nesting level
    unit: usize,
}

impl BlockIndenter {
    #[must_use]
    pub fn new(unit: usize) -> Self {
        Self {
            open_blocks: Vec::new(),
            unit,
        }
    }

    /// Current nesting depth
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open_blocks.len()
    }

    /// Compute the indent (in spaces) for `line` and update the block stack
    ///
    /// A closing brace is indented at its parent's level; an opening line is
    /// indented at the current level and deepens the lines that follow.
    pub fn indent_for(&mut self, line: &SourceLine) -> Result<usize> {
        match line {
            SourceLine::Close => {
                if self.open_blocks.pop().is_none() {
                    bail!("unmatched closing brace");
                }
                Ok(self.depth() * self.unit)
            }
            SourceLine::ModOpen { name, .. } => {
                let indent = self.depth() * self.unit;
                self.open_blocks.push(name.clone());
                Ok(indent)
            }
            _ => Ok(self.depth() * self.unit),
        }
    }

    /// Check that every block was closed
    pub fn finish(&self) -> Result<()> {
        if let Some(name) = self.open_blocks.last() {
            bail!("block `{name}` is never closed");
        }
        Ok(())
    }
}
