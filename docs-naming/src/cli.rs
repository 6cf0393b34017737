use std::io::Write;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use docs_naming::{NamingRules, docs_dir_in, output, resolve_docs_dir, validate_dir};
use tracing::info;

use crate::logging;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "validate-docs-naming", version)]
#[command(about = "Check that documentation file names follow the <TAG>-<Words>-<Words>.md convention", long_about = None)]
pub struct Cli {
    /// Repository root containing the `docs` directory.
    /// Defaults to the workspace this binary was built from (fixed at compile
    /// time), so pass `--root` when running an installed binary elsewhere
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Verbosity level (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn docs_dir(&self) -> PathBuf {
        match &self.root {
            Some(root) => docs_dir_in(root),
            None => resolve_docs_dir(Path::new(env!("CARGO_MANIFEST_DIR"))),
        }
    }
}

/// Run the validator. Returns `Ok(false)` when the process should exit with
/// status 1: naming violations were found or the arguments were rejected.
///
/// # Errors
///
/// Returns an error if the docs directory is missing or cannot be listed, or
/// if writing the report fails.
pub fn run() -> anyhow::Result<bool> {
    // clap's own exit path uses status 2 for usage errors; only 0 and 1 are allowed.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ));
        }
    };
    logging::init(cli.verbose);

    let docs_dir = cli.docs_dir();
    let rules = NamingRules::default();
    info!(dir = %docs_dir.display(), "validating documentation file names");

    let report = validate_dir(&docs_dir, &rules)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &rules, &mut out)?,
        OutputFormat::Json => output::write_json(&report, &mut out)?,
    }
    out.flush()?;

    info!(
        total = report.total_files(),
        invalid = report.invalid_count(),
        "validation finished"
    );
    Ok(report.ok())
}
