//! # docs-naming
//!
//! Checks that every file directly inside a documentation directory follows
//! the `<TAG>-<Words>-<Words>.md` naming convention, where `<TAG>` is one of
//! `META`, `ARCH`, `SPEC`, `IMPL` or `QA`.
//!
//! Scanning and rendering are separate: [`validate_dir`] produces a
//! [`ScanReport`], and the [`output`] module turns it into text or JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use docs_naming::{NamingRules, docs_dir_in, validate_dir};
//!
//! let docs_dir = docs_dir_in(Path::new("."));
//! let report = validate_dir(&docs_dir, &NamingRules::default()).unwrap();
//! println!("Files: {}", report.total_files());
//! println!("Invalid: {}", report.invalid_count());
//! println!("OK: {}", report.ok());
//! ```

mod config;
mod error;
pub mod output;
mod report;
mod scan;

use std::path::Path;

use tracing::debug;

pub use config::{
    DEFAULT_PATTERN, DOCS_DIR_NAME, EXEMPT_FILES, NamingRules, docs_dir_in, resolve_docs_dir,
    validate_filename,
};
pub use error::ValidatorError;
pub use report::{Classification, FileOutcome, ScanReport};

/// Scan `docs_dir` and classify every file directly inside it.
///
/// Naming violations do not fail the call; check [`ScanReport::ok`].
///
/// # Errors
///
/// Returns [`ValidatorError::MissingDirectory`] if `docs_dir` does not exist,
/// in which case nothing is classified. Other listing faults are returned as
/// [`ValidatorError::NotADirectory`] or [`ValidatorError::ReadDir`].
pub fn validate_dir(docs_dir: &Path, rules: &NamingRules) -> Result<ScanReport, ValidatorError> {
    let names = scan::list_file_names(docs_dir)?;

    let outcomes = names
        .into_iter()
        .map(|name| {
            let classification = rules.classify(&name);
            debug!(file = %name, ?classification, "classified");
            FileOutcome {
                name,
                classification,
            }
        })
        .collect();

    Ok(ScanReport::new(docs_dir.to_path_buf(), outcomes))
}
