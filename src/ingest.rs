// src/ingest.rs
//! CSV ingestion: header-driven row parsing with per-row diagnostics.

use crate::error::Result;
use crate::types::IssueRecord;
use colored::Colorize;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;

/// Reads the export at `path` and returns every row that validates.
///
/// Rows that fail validation are reported to stderr with their row number
/// (row 1 is the header, so data rows start at 2) and skipped; one bad row
/// never aborts the run. The reader is flexible so a short row surfaces as
/// a missing-column diagnostic instead of a reader error.
///
/// # Errors
/// Fails only when the file itself cannot be opened or read.
pub fn read_issues(path: &Path) -> Result<Vec<IssueRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut issues = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row_number = index + 2;
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn_row(row_number, &err.to_string());
                continue;
            }
        };

        let fields: HashMap<&str, &str> = headers.iter().zip(record.iter()).collect();
        match IssueRecord::from_fields(&fields) {
            Ok(issue) => issues.push(issue),
            Err(err) => warn_row(row_number, &err.to_string()),
        }
    }

    Ok(issues)
}

fn warn_row(row_number: usize, message: &str) {
    eprintln!(
        "{} failed to parse row {row_number}: {message}",
        "warning:".yellow().bold()
    );
}
