//! Error types for documentation name validation.
//!
//! Naming violations are not errors: they are recorded in the
//! [`ScanReport`](crate::ScanReport) so the whole directory is always reported.
//! The variants here are the faults that stop a run before a report exists.

use std::path::PathBuf;

use thiserror::Error;

/// A fault that prevents a scan from producing a report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// The documentation directory does not exist.
    #[error("Documentation directory does not exist: {}", path.display())]
    MissingDirectory {
        /// The resolved path that was checked.
        path: PathBuf,
    },

    /// The documentation path exists but is not a directory.
    #[error("Documentation path is not a directory: {}", path.display())]
    NotADirectory {
        /// The resolved path that was checked.
        path: PathBuf,
    },

    /// Listing the directory or reading an entry's metadata failed.
    #[error("Failed to list {}: {source}", path.display())]
    ReadDir {
        /// The directory being listed, or the entry that failed.
        path: PathBuf,
        /// The underlying traversal error.
        #[source]
        source: walkdir::Error,
    },

    /// A custom naming pattern could not be compiled.
    #[error("Invalid naming pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern source string.
        pattern: String,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },
}
