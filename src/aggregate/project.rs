// src/aggregate/project.rs
//! Grouping by owning project.
//!
//! Same accumulation as the CVE-CWE strategy, keyed by (name, url) instead;
//! the Cartesian expansion survives as a set of "<cve> + <cwe>" labels.

use super::{keys_or, NO_CVE, NO_CWE};
use crate::types::IssueRecord;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One project report section.
#[derive(Debug, Serialize)]
pub struct ProjectGroup {
    pub project_name: String,
    pub project_url: String,
    pub total_issues: usize,
    pub fixable_count: usize,
    pub severity_counts: BTreeMap<String, usize>,
    /// Distinct problem titles, alphabetical.
    pub problem_titles: Vec<String>,
    /// Distinct "<cve> + <cwe>" labels, alphabetical.
    pub cve_cwe_pairs: Vec<String>,
}

#[derive(Default)]
struct Accumulator {
    total_issues: usize,
    fixable_count: usize,
    severity_counts: BTreeMap<String, usize>,
    problem_titles: BTreeSet<String>,
    cve_cwe_pairs: BTreeSet<String>,
}

impl Accumulator {
    fn add(&mut self, issue: &IssueRecord) {
        self.total_issues += 1;
        *self
            .severity_counts
            .entry(issue.issue_severity.clone())
            .or_insert(0) += 1;
        self.problem_titles.insert(issue.problem_title.clone());

        for cve in keys_or(&issue.cve, NO_CVE) {
            for cwe in keys_or(&issue.cwe, NO_CWE) {
                self.cve_cwe_pairs.insert(format!("{cve} + {cwe}"));
            }
        }

        if issue.is_fixable() {
            self.fixable_count += 1;
        }
    }

    fn finish(self, (project_name, project_url): (String, String)) -> ProjectGroup {
        ProjectGroup {
            project_name,
            project_url,
            total_issues: self.total_issues,
            fixable_count: self.fixable_count,
            severity_counts: self.severity_counts,
            problem_titles: self.problem_titles.into_iter().collect(),
            cve_cwe_pairs: self.cve_cwe_pairs.into_iter().collect(),
        }
    }
}

/// Folds records into project groups ordered by descending issue count.
#[must_use]
pub fn group(issues: &[IssueRecord]) -> Vec<ProjectGroup> {
    let mut accumulators: HashMap<(String, String), Accumulator> = HashMap::new();
    let mut order: Vec<(String, String)> = Vec::new();

    for issue in issues {
        let key = (issue.project_name.clone(), issue.project_url.clone());
        if !accumulators.contains_key(&key) {
            order.push(key.clone());
        }
        accumulators.entry(key).or_default().add(issue);
    }

    let mut groups: Vec<ProjectGroup> = order
        .into_iter()
        .filter_map(|key| {
            accumulators
                .remove(&key)
                .map(|accumulator| accumulator.finish(key))
        })
        .collect();

    // Stable sort: ties keep first-seen order.
    groups.sort_by_key(|group| Reverse(group.total_issues));
    groups
}
