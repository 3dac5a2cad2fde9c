// src/cli/handlers.rs
//! The ingest → aggregate → render pipeline.

use crate::aggregate;
use crate::cli::Cli;
use crate::error::{Result, VulnsightError};
use crate::ingest;
use crate::reporting;
use colored::Colorize;
use std::path::PathBuf;

/// Runs one full report generation.
///
/// # Errors
/// Fails when the input file is missing or unreadable, or when the report
/// cannot be written. Individual bad rows are warnings, not failures.
pub fn run(cli: &Cli) -> Result<()> {
    if !cli.csv_file.exists() {
        return Err(VulnsightError::InputNotFound(cli.csv_file.clone()));
    }

    let output_path = resolve_output_path(cli);

    println!("Reading CSV file: {}", cli.csv_file.display());
    let issues = ingest::read_issues(&cli.csv_file)?;
    println!(
        "Successfully parsed {} issues",
        issues.len().to_string().green()
    );

    let data = aggregate::prepare(&issues, cli.group_by);
    reporting::write_report(&data, &output_path)?;
    println!(
        "HTML report generated: {}",
        output_path.display().to_string().cyan()
    );

    Ok(())
}

/// An explicit `-o` path wins; otherwise `output/report_<strategy>.html`.
fn resolve_output_path(cli: &Cli) -> PathBuf {
    cli.output_file.clone().unwrap_or_else(|| {
        PathBuf::from("output").join(cli.group_by.default_report_name())
    })
}
