//! Generation pipeline and output handling.
//!
//! The run is a strict sequence with no branch back and no retry:
//!
//! 1. **Parse** the listing into a [`Document`](crate::document::Document)
//! 2. **Render** the fixed template
//! 3. **Format** the rendered text (this is where invalid names or codes surface)
//! 4. **Write** the bytes to the [`Destination`]
//!
//! Stages 1-3 run in memory via [`generate_source`]; the destination is only
//! opened once they have succeeded, so a failed run never touches it.

pub mod output;
pub mod pipeline;

pub use output::{write_output, Destination};
pub use pipeline::{generate, generate_source, Generated};
