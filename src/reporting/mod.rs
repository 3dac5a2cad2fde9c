// src/reporting/mod.rs
//! HTML report rendering and output.
//!
//! Pure presentation: the aggregation is bound into a fixed layout per
//! strategy and written as one self-contained file.

mod cve_cwe;
mod project;
mod shared;

use crate::aggregate::{Groups, ReportData};
use crate::error::{Result, VulnsightError};
use std::fs;
use std::path::Path;

/// Renders the layout matching the aggregation strategy.
#[must_use]
pub fn render(data: &ReportData) -> String {
    match &data.groups {
        Groups::CveCwe(groups) => cve_cwe::render(data, groups),
        Groups::Project(groups) => project::render(data, groups),
    }
}

/// Renders the report and writes it to `path`, creating parent directories
/// as needed.
///
/// # Errors
/// Returns an I/O error carrying the offending path when the directory or
/// the file cannot be written.
pub fn write_report(data: &ReportData, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| VulnsightError::io(source, parent))?;
        }
    }
    fs::write(path, render(data)).map_err(|source| VulnsightError::io(source, path))
}
