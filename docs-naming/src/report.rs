//! Scan report types.

use std::path::PathBuf;

use serde::Serialize;

/// How a single file name was judged.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Listed in the exemption set; the pattern was not evaluated.
    Exempt,
    /// Matches the naming pattern.
    Valid,
    /// Neither exempt nor matching.
    Invalid,
}

/// One scanned file and its classification.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileOutcome {
    /// File name as listed (lossy UTF-8 if the OS name is not valid UTF-8).
    pub name: String,
    pub classification: Classification,
}

/// Result of scanning one documentation directory.
///
/// Outcomes are kept in directory listing order, which is filesystem-dependent.
/// Subdirectories never appear here. All counts are derived from `outcomes`.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ScanReport {
    /// The directory that was scanned.
    pub docs_dir: PathBuf,
    /// Per-file outcomes in listing order.
    pub outcomes: Vec<FileOutcome>,
}

impl ScanReport {
    #[must_use]
    pub fn new(docs_dir: PathBuf, outcomes: Vec<FileOutcome>) -> Self {
        Self { docs_dir, outcomes }
    }

    /// Number of files seen (exempt + valid + invalid).
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.count(Classification::Valid)
    }

    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.count(Classification::Invalid)
    }

    #[must_use]
    pub fn exempt_count(&self) -> usize {
        self.count(Classification::Exempt)
    }

    /// Invalid file names in listing order.
    pub fn invalid_files(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| o.classification == Classification::Invalid)
            .map(|o| o.name.as_str())
    }

    /// Whether every non-exempt file matched the pattern.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.invalid_count() == 0
    }

    fn count(&self, classification: Classification) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.classification == classification)
            .count()
    }
}
