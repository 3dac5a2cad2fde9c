// src/reporting/project.rs
//! Layout for the project grouping: one accordion per (name, url) project.

use super::shared::{escape, list_section, page_close, page_open, severity_badges};
use crate::aggregate::{ProjectGroup, ReportData};
use std::fmt::Write as _;

pub(crate) fn render(data: &ReportData, groups: &[ProjectGroup]) -> String {
    let mut html = page_open("Security Issues by Project", data);

    html.push_str("    <h2>Projects</h2>\n");
    for group in groups {
        html.push_str(&render_group(group));
    }

    html.push_str(page_close());
    html
}

fn render_group(group: &ProjectGroup) -> String {
    let mut html = String::from("    <details class=\"group\">\n");
    let _ = write!(
        html,
        "        <summary><a href=\"{url}\">{name}</a><span class=\"counts\">{issues} issue{s}, {fixable} fixable</span></summary>\n",
        url = escape(&group.project_url),
        name = escape(&group.project_name),
        issues = group.total_issues,
        s = if group.total_issues == 1 { "" } else { "s" },
        fixable = group.fixable_count,
    );

    html.push_str(&severity_badges(&group.severity_counts));
    html.push_str(&list_section(
        "Problems",
        group.problem_titles.iter().map(|title| escape(title)),
    ));
    html.push_str(&list_section(
        "CVE-CWE Pairs",
        group.cve_cwe_pairs.iter().map(|pair| escape(pair)),
    ));

    html.push_str("    </details>\n");
    html
}
