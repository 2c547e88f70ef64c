//! # a11y-scan CLI
//!
//! Offline tooling over persisted scan result files: numeric summaries,
//! HTML issue reports, and a violation gate for CI pipelines.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use a11y_scanner_base::prelude::*;

/// Exit code for infrastructure failures (bad file, bad category, I/O)
const EXIT_FAILURE: u8 = 1;
/// Exit code when the gate finds accessibility violations
const EXIT_VIOLATIONS: u8 = 2;

#[derive(Parser)]
#[command(name = "a11y-scan", version, about = "Accessibility scan result tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print category counts for a persisted scan result
    Summary {
        /// Persisted scan result (.json)
        result_file: PathBuf,

        /// Emit the summary as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Render the HTML issue table for one result category
    Report {
        /// Persisted scan result (.json)
        result_file: PathBuf,

        /// Category to report: violations, incomplete, passes, inapplicable
        #[arg(long, default_value = DEFAULT_ISSUES_CATEGORY)]
        category: String,

        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit non-zero if the result has any violations
        #[arg(long)]
        fail_on_violations: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ViolationsFound { count }) => {
            eprintln!("FAIL: found accessibility issues ({count} violation rule(s))");
            ExitCode::from(EXIT_VIOLATIONS)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Parse(#[from] ResultParseError),

    #[error("{0}")]
    Category(#[from] UnsupportedCategory),

    #[error("Failed to write report to '{path}': {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Found accessibility issues: {count} violation rule(s)")]
    ViolationsFound { count: usize },
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Summary { result_file, json } => summary(&result_file, json),
        Command::Report {
            result_file,
            category,
            output,
            fail_on_violations,
        } => report(&result_file, &category, output.as_deref(), fail_on_violations),
    }
}

fn summary(result_file: &Path, json: bool) -> Result<(), CliError> {
    let result = ScanResult::from_json_file(result_file)?;
    let summary = Summary::of(&result);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Scan result: {}", result_file.display());
        println!("  violations:   {}", summary.violations);
        println!("  incomplete:   {}", summary.incomplete);
        println!("  passes:       {}", summary.passes);
        println!("  inapplicable: {}", summary.inapplicable);
        println!("  total rules:  {}", summary.total());
    }
    Ok(())
}

fn report(
    result_file: &Path,
    category: &str,
    output: Option<&Path>,
    fail_on_violations: bool,
) -> Result<(), CliError> {
    let result = ScanResult::from_json_file(result_file)?;
    let category: RuleCategory = category.parse()?;

    let table = ReportTable::render(&result, category);
    log::info!(
        "rendered {} report rows for category '{}'",
        table.len(),
        category
    );
    let html = render_html(&table);

    match output {
        Some(path) => {
            let generated_at = chrono::Utc::now().to_rfc3339();
            let contents = format!("<!-- generated by a11y-scan at {generated_at} -->\n{html}");
            std::fs::write(path, contents).map_err(|source| CliError::ReportWrite {
                path: path.display().to_string(),
                source,
            })?;
        }
        None => print!("{html}"),
    }

    if fail_on_violations && !result.violations.is_empty() {
        return Err(CliError::ViolationsFound {
            count: result.violations.len(),
        });
    }
    Ok(())
}
