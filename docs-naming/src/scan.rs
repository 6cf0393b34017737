//! Filesystem listing for the documentation directory.
//!
//! Only immediate children are listed. Symlinks are not traversed, but an
//! entry that resolves to a directory is still treated as a directory and
//! skipped.

use std::path::Path;

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::ValidatorError;

/// List file names directly under `dir`, in native listing order.
///
/// Subdirectories are dropped. The listing is fully read before returning.
///
/// # Errors
///
/// Returns [`ValidatorError::MissingDirectory`] if `dir` does not exist,
/// [`ValidatorError::NotADirectory`] if it is not a directory, and
/// [`ValidatorError::ReadDir`] if the listing fails part way.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>, ValidatorError> {
    if !dir.exists() {
        return Err(ValidatorError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(ValidatorError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    debug!(dir = %dir.display(), "listing documentation directory");

    let mut names = Vec::new();
    for entry_result in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = entry_result.map_err(|source| ValidatorError::ReadDir {
            path: source.path().unwrap_or(dir).to_path_buf(),
            source,
        })?;

        // Path::is_dir follows symlinks, so a link to a directory is skipped too.
        if entry.path().is_dir() {
            trace!(entry = %entry.path().display(), "skipping subdirectory");
            continue;
        }

        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    debug!(files = names.len(), "directory listing complete");
    Ok(names)
}
