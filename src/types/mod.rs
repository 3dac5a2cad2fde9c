use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// The fixability value the scanner emits when a remediation is available.
/// Only this exact literal counts; "fixable" or "Partially Fixable" do not.
pub const FIXABLE: &str = "Fixable";

/// Datetime formats accepted for `FIRST_INTRODUCED`, tried in order.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Grouping strategy: which key the aggregator folds issues under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupBy {
    /// One report section per (CVE, CWE) pair.
    CveCwe,
    /// One report section per project.
    Project,
}

impl GroupBy {
    /// Label used in CLI output and bound into the report.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CveCwe => "cve-cwe",
            Self::Project => "project",
        }
    }

    /// Report file name used when no explicit output path is given.
    #[must_use]
    pub fn default_report_name(self) -> &'static str {
        match self {
            Self::CveCwe => "report_cve_cwe.html",
            Self::Project => "report_project.html",
        }
    }
}

/// Why a single CSV row failed validation.
///
/// Recoverable: the ingestor reports the row and moves on.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("invalid number in {column}: {value:?}")]
    InvalidNumber {
        column: &'static str,
        value: String,
    },

    #[error("unable to parse datetime: {0}")]
    Timestamp(String),
}

/// One normalized scanner finding, parsed from a single CSV row.
///
/// Immutable once constructed; all coercion happens in [`IssueRecord::from_fields`].
#[derive(Debug, Clone, Serialize)]
pub struct IssueRecord {
    pub issue_severity_rank: u32,
    pub issue_severity: String,
    pub score: i64,
    pub problem_title: String,
    /// CVE identifiers; may be empty (the aggregator substitutes "No CVE").
    pub cve: Vec<String>,
    /// Reference links matching `cve` positionally.
    pub cve_url: Vec<String>,
    /// CWE identifiers; may be empty (the aggregator substitutes "No CWE").
    pub cwe: Vec<String>,
    pub project_name: String,
    pub project_url: String,
    pub exploit_maturity: Option<String>,
    pub computed_fixability: String,
    pub first_introduced: Option<NaiveDateTime>,
    pub product_name: Option<String>,
    pub issue_url: String,
    pub issue_status_indicator: String,
    pub issue_type: String,
}

impl IssueRecord {
    /// Builds a record from one row's column-name → cell-text mapping.
    ///
    /// List-valued cells hold a JSON-encoded array; malformed JSON or a
    /// non-array shape coerces to the empty list rather than failing the row.
    ///
    /// # Errors
    /// Returns a [`RowError`] naming the missing column or unparsable value.
    pub fn from_fields(fields: &HashMap<&str, &str>) -> Result<Self, RowError> {
        Ok(Self {
            issue_severity_rank: number_field(fields, "ISSUE_SEVERITY_RANK")?,
            issue_severity: required(fields, "ISSUE_SEVERITY")?.to_string(),
            score: number_field(fields, "SCORE")?,
            problem_title: required(fields, "PROBLEM_TITLE")?.to_string(),
            cve: list_field(fields, "CVE"),
            cve_url: list_field(fields, "CVE_URL"),
            cwe: list_field(fields, "CWE"),
            project_name: required(fields, "PROJECT_NAME")?.to_string(),
            project_url: required(fields, "PROJECT_URL")?.to_string(),
            exploit_maturity: optional(fields, "EXPLOIT_MATURITY"),
            computed_fixability: required(fields, "COMPUTED_FIXABILITY")?.to_string(),
            first_introduced: timestamp_field(fields, "FIRST_INTRODUCED")?,
            product_name: optional(fields, "PRODUCT_NAME"),
            issue_url: required(fields, "ISSUE_URL")?.to_string(),
            issue_status_indicator: required(fields, "ISSUE_STATUS_INDICATOR")?.to_string(),
            issue_type: required(fields, "ISSUE_TYPE")?.to_string(),
        })
    }

    /// Whether the scanner reported a remediation as available.
    #[must_use]
    pub fn is_fixable(&self) -> bool {
        self.computed_fixability == FIXABLE
    }
}

fn required<'a>(
    fields: &HashMap<&str, &'a str>,
    column: &'static str,
) -> Result<&'a str, RowError> {
    fields
        .get(column)
        .copied()
        .ok_or(RowError::MissingColumn(column))
}

/// Absent column or empty cell both normalize to `None`.
fn optional(fields: &HashMap<&str, &str>, column: &'static str) -> Option<String> {
    fields
        .get(column)
        .copied()
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
}

fn list_field(fields: &HashMap<&str, &str>, column: &'static str) -> Vec<String> {
    fields
        .get(column)
        .map(|cell| serde_json::from_str(cell).unwrap_or_default())
        .unwrap_or_default()
}

fn number_field<T: std::str::FromStr>(
    fields: &HashMap<&str, &str>,
    column: &'static str,
) -> Result<T, RowError> {
    let value = required(fields, column)?;
    value.trim().parse().map_err(|_| RowError::InvalidNumber {
        column,
        value: value.to_string(),
    })
}

fn timestamp_field(
    fields: &HashMap<&str, &str>,
    column: &'static str,
) -> Result<Option<NaiveDateTime>, RowError> {
    let Some(cell) = fields.get(column).copied().filter(|cell| !cell.is_empty()) else {
        return Ok(None);
    };
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(cell, format) {
            return Ok(Some(parsed));
        }
    }
    Err(RowError::Timestamp(cell.to_string()))
}
