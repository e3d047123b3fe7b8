//! genicodes - Icon font codepoints to Rust constants
//!
//! Reads a `<name> <hex>` listing (such as the Material Design icons
//! `codepoints` file) and generates a formatted Rust module declaring one
//! constant per entry.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;
pub mod render;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use document::{Document, Entry, Origin};
pub use error::Result;
pub use process::{generate, generate_source, write_output, Destination, Generated};
