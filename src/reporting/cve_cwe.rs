// src/reporting/cve_cwe.rs
//! Layout for the CVE-CWE grouping: one accordion per (CVE, CWE) pair.

use super::shared::{escape, list_section, page_close, page_open, severity_badges};
use crate::aggregate::{CveCweGroup, ReportData};
use std::fmt::Write as _;

pub(crate) fn render(data: &ReportData, groups: &[CveCweGroup]) -> String {
    let mut html = page_open("Security Issues by CVE-CWE Pair", data);

    html.push_str("    <h2>Groups</h2>\n");
    for group in groups {
        html.push_str(&render_group(group));
    }

    html.push_str(page_close());
    html
}

fn render_group(group: &CveCweGroup) -> String {
    let mut html = String::from("    <details class=\"group\">\n");
    let _ = write!(
        html,
        "        <summary>{cve} + {cwe}<span class=\"counts\">{issues} issue{s}, {fixable} fixable</span></summary>\n",
        cve = escape(&group.cve),
        cwe = escape(&group.cwe),
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
        "Projects",
        group.projects.iter().map(|project| {
            format!(
                "<a href=\"{url}\">{name}</a>",
                url = escape(&project.url),
                name = escape(&project.name),
            )
        }),
    ));

    html.push_str("    </details>\n");
    html
}
