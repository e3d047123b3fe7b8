//! Error types and result aliases for genicodes.
//!
//! Every stage of the pipeline reports failures through [`Result<T>`], a type
//! alias for `anyhow::Result<T>`. Errors are never retried: the first one
//! aborts the run and is reported by `main` on stderr.

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
