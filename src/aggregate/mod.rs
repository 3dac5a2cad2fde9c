// src/aggregate/mod.rs
//! Folds validated records into summary groups for one of the two
//! grouping strategies, plus the global statistics both share.

pub mod cve_cwe;
pub mod project;

pub use cve_cwe::{CveCweGroup, ProjectRef};
pub use project::ProjectGroup;

use crate::types::{GroupBy, IssueRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Group key substituted when a record carries no CVE identifier.
pub const NO_CVE: &str = "No CVE";
/// Group key substituted when a record carries no CWE identifier.
pub const NO_CWE: &str = "No CWE";

/// Everything the renderer needs: global statistics plus the ordered groups.
#[derive(Debug, Serialize)]
pub struct ReportData {
    pub total_issues: usize,
    pub total_groups: usize,
    pub severity_counts: BTreeMap<String, usize>,
    pub fixable_count: usize,
    pub group_by: GroupBy,
    pub groups: Groups,
}

/// The ordered groups for whichever strategy ran.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Groups {
    CveCwe(Vec<CveCweGroup>),
    Project(Vec<ProjectGroup>),
}

impl Groups {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::CveCwe(groups) => groups.len(),
            Self::Project(groups) => groups.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the full aggregation for the selected strategy.
///
/// Groups come back sorted by descending member-issue count; the sort is
/// stable, so groups with equal counts keep the order their keys were first
/// seen in the input.
#[must_use]
pub fn prepare(issues: &[IssueRecord], group_by: GroupBy) -> ReportData {
    let mut severity_counts: BTreeMap<String, usize> = BTreeMap::new();
    for issue in issues {
        *severity_counts
            .entry(issue.issue_severity.clone())
            .or_insert(0) += 1;
    }

    let fixable_count = issues.iter().filter(|issue| issue.is_fixable()).count();

    let groups = match group_by {
        GroupBy::CveCwe => Groups::CveCwe(cve_cwe::group(issues)),
        GroupBy::Project => Groups::Project(project::group(issues)),
    };

    ReportData {
        total_issues: issues.len(),
        total_groups: groups.len(),
        severity_counts,
        fixable_count,
        group_by,
        groups,
    }
}

/// The Cartesian-expansion key list: the identifiers themselves, or the
/// sentinel when the record carries none.
pub(crate) fn keys_or<'a>(values: &'a [String], sentinel: &'a str) -> Vec<&'a str> {
    if values.is_empty() {
        vec![sentinel]
    } else {
        values.iter().map(String::as_str).collect()
    }
}
