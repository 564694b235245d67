//! Error types for env2secret.
//!
//! Every variant is fatal to an invocation: nothing is retried and no
//! partial output is written.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The env file is missing, unreadable, or failed mid-scan.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be serialized.
    #[error("failed to build manifest: {0}")]
    Build(#[from] serde_yaml::Error),

    /// The output file could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this is a read failure caused by a missing input file.
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Error::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
