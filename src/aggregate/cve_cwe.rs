// src/aggregate/cve_cwe.rs
//! Grouping by (CVE, CWE) pair.
//!
//! A record with several CVEs and CWEs lands in every pair of the Cartesian
//! product, and its tallies count once per group it touches. Group counts
//! are independent views of the input, not a partition of the total.

use super::{keys_or, NO_CVE, NO_CWE};
use crate::types::IssueRecord;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One (CVE, CWE) report section.
#[derive(Debug, Serialize)]
pub struct CveCweGroup {
    pub cve: String,
    pub cwe: String,
    pub total_issues: usize,
    pub fixable_count: usize,
    pub severity_counts: BTreeMap<String, usize>,
    /// Distinct problem titles, alphabetical.
    pub problem_titles: Vec<String>,
    /// Projects touched by the group's issues, sorted by name.
    pub projects: Vec<ProjectRef>,
}

/// A project link inside a group.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRef {
    pub name: String,
    pub url: String,
}

#[derive(Default)]
struct Accumulator {
    total_issues: usize,
    fixable_count: usize,
    severity_counts: BTreeMap<String, usize>,
    problem_titles: BTreeSet<String>,
    // name → url; a recurring name overwrites the earlier url
    projects: BTreeMap<String, String>,
}

impl Accumulator {
    fn add(&mut self, issue: &IssueRecord) {
        self.total_issues += 1;
        *self
            .severity_counts
            .entry(issue.issue_severity.clone())
            .or_insert(0) += 1;
        self.projects
            .insert(issue.project_name.clone(), issue.project_url.clone());
        self.problem_titles.insert(issue.problem_title.clone());
        if issue.is_fixable() {
            self.fixable_count += 1;
        }
    }

    fn finish(self, (cve, cwe): (String, String)) -> CveCweGroup {
        CveCweGroup {
            cve,
            cwe,
            total_issues: self.total_issues,
            fixable_count: self.fixable_count,
            severity_counts: self.severity_counts,
            problem_titles: self.problem_titles.into_iter().collect(),
            projects: self
                .projects
                .into_iter()
                .map(|(name, url)| ProjectRef { name, url })
                .collect(),
        }
    }
}

/// Folds records into (CVE, CWE) groups ordered by descending issue count.
#[must_use]
pub fn group(issues: &[IssueRecord]) -> Vec<CveCweGroup> {
    let mut accumulators: HashMap<(String, String), Accumulator> = HashMap::new();
    let mut order: Vec<(String, String)> = Vec::new();

    for issue in issues {
        for cve in keys_or(&issue.cve, NO_CVE) {
            for cwe in keys_or(&issue.cwe, NO_CWE) {
                let key = (cve.to_string(), cwe.to_string());
                if !accumulators.contains_key(&key) {
                    order.push(key.clone());
                }
                accumulators.entry(key).or_default().add(issue);
            }
        }
    }

    let mut groups: Vec<CveCweGroup> = order
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
