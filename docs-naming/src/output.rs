//! Output formatting for scan reports.
//!
//! Provides JSON and plain-text formatters for [`ScanReport`].

use std::io::Write;

use serde::Serialize;

use crate::config::NamingRules;
use crate::report::{Classification, FileOutcome, ScanReport};

/// JSON shape of a report: the raw outcomes plus the derived counters.
#[derive(Serialize)]
struct JsonReport<'a> {
    docs_dir: &'a std::path::Path,
    total_files: usize,
    valid_files: usize,
    invalid_files: usize,
    exempt_files: usize,
    ok: bool,
    invalid: Vec<&'a str>,
    outcomes: &'a [FileOutcome],
}

/// Format a `ScanReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ScanReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport {
        docs_dir: &report.docs_dir,
        total_files: report.total_files(),
        valid_files: report.valid_count(),
        invalid_files: report.invalid_count(),
        exempt_files: report.exempt_count(),
        ok: report.ok(),
        invalid: report.invalid_files().collect(),
        outcomes: &report.outcomes,
    })?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ScanReport` as human-readable plain text to a writer.
///
/// Per-file lines come first, then the summary, then the invalid list.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(
    report: &ScanReport,
    rules: &NamingRules,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(writer, "Validating documentation file names...")?;
    writeln!(writer, "Docs directory: {}", report.docs_dir.display())?;
    writeln!(writer, "Naming pattern: {}", rules.pattern())?;
    writeln!(writer)?;

    for outcome in &report.outcomes {
        match outcome.classification {
            Classification::Exempt => writeln!(writer, "  - skipped (exempt): {}", outcome.name)?,
            Classification::Valid => writeln!(writer, "  \u{2713} valid: {}", outcome.name)?,
            Classification::Invalid => writeln!(writer, "  \u{2717} invalid: {}", outcome.name)?,
        }
    }

    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  RESULTS")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  Total files:    {}", report.total_files())?;
    writeln!(writer, "  Valid files:    {}", report.valid_count())?;
    writeln!(writer, "  Invalid files:  {}", report.invalid_count())?;
    writeln!(writer, "  Exempt files:   {}", report.exempt_count())?;
    writeln!(writer)?;

    if report.ok() {
        writeln!(writer, "\u{2713} All files follow the naming convention")?;
        return Ok(());
    }

    writeln!(writer, "{}", "-".repeat(80))?;
    writeln!(writer, "  INVALID FILES")?;
    writeln!(writer, "{}", "-".repeat(80))?;
    for name in report.invalid_files() {
        writeln!(writer, "- {name}")?;
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "\u{2717} {} file(s) do not follow the naming convention",
        report.invalid_count()
    )?;
    writeln!(writer, "  Expected: <META|ARCH|SPEC|IMPL|QA>-<Letters>-<Letters>.md")?;

    Ok(())
}
