//! Error types for the dump pipeline.
//!
//! Only two conditions are fatal: the root directory cannot be opened for
//! traversal, or the output artifact cannot be created. Everything that goes
//! wrong with an individual candidate file is recorded as a skip, never an
//! error (see [`crate::commands::dump::SkippedFile`]).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort an entire dump run.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The traversal root does not exist or is not readable.
    #[error("cannot open root directory {}: {source}", .path.display())]
    RootNotAccessible { path: PathBuf, source: io::Error },

    /// The traversal root exists but is not a directory.
    #[error("root path {} is not a directory", .path.display())]
    RootNotDirectory { path: PathBuf },

    /// The output artifact could not be created or truncated.
    #[error("cannot create output file {}: {source}", .path.display())]
    OutputCreate { path: PathBuf, source: io::Error },
}
