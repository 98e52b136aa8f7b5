//! Error types for the restamp library
//!
//! Failures that abort a run carry the offending path, so the deployment
//! log points straight at the file that broke. Resolver failures are not
//! represented here; those degrade to an empty candidate set instead of
//! surfacing as errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum RestampError {
    /// A candidate file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A patched file could not be written back
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The posts directory could not be enumerated
    #[error("failed to scan posts directory {}: {source}", .dir.display())]
    Scan {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Regular expression errors
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RestampError>;

impl RestampError {
    /// Create a new read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a new scan error
    pub fn scan(dir: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Scan {
            dir: dir.into(),
            source,
        }
    }
}
