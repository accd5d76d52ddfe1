//! Error types for cohort validation.
//!
//! Structural problems inside a cohort are never errors: they are reported as
//! [`Issue`](crate::Issue) records. The variants here cover the cases where a
//! validation pass cannot run at all.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The cohort root (or cohort parent) does not exist.
    #[error("Cohort root not found: {}", path.display())]
    CohortNotFound { path: PathBuf },

    /// The cohort root exists but is a file or other non-directory entry.
    #[error("Cohort root is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// A directory listing could not be read.
    #[error("Failed to read directory {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
