//! Output destinations.
//!
//! The destination is created (or truncated) only when the final bytes are
//! ready. File handles are scoped to [`write_output`] and closed on every
//! exit path.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::Result;

/// Where the generated source goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Stdout when no path is given
    #[must_use]
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Destination::File(p.to_path_buf()),
            None => Destination::Stdout,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Write `bytes` to `destination`, truncating any existing file
pub fn write_output(destination: &Destination, bytes: &[u8]) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
        Destination::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(bytes)
                .and_then(|()| writer.flush())
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
    }
    Ok(())
}
