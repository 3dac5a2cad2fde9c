// src/reporting/shared.rs
//! Helpers shared by both report layouts: page chrome, escaping, badges.

use crate::aggregate::ReportData;
use std::collections::BTreeMap;
use std::fmt::Write as _;

const STYLE: &str = "\
        body { font-family: Arial, sans-serif; margin: 20px; color: #2d3436; }
        .header { background-color: #f4f4f4; padding: 20px; border-radius: 5px; }
        .header h1 { margin: 0 0 10px 0; }
        .statistics { display: flex; justify-content: space-around; margin: 20px 0; }
        .stat-box { text-align: center; padding: 15px 30px; background-color: #e8f4f8; border-radius: 5px; }
        .stat-box h3 { margin: 0; font-size: 1.6em; }
        .stat-box p { margin: 5px 0 0 0; }
        .badges { margin: 10px 0; }
        .badge { display: inline-block; padding: 3px 10px; margin-right: 6px; border-radius: 10px; color: #fff; font-size: 0.85em; }
        .badge.critical { background-color: #d63031; }
        .badge.high { background-color: #e17055; }
        .badge.medium { background-color: #fdcb6e; color: #2d3436; }
        .badge.low { background-color: #6c5ce7; }
        .badge.info { background-color: #74b9ff; }
        details.group { margin: 10px 0; padding: 10px 15px; border-left: 4px solid #74b9ff; background-color: #fafafa; border-radius: 3px; }
        details.group summary { cursor: pointer; font-weight: bold; }
        details.group summary .counts { font-weight: normal; color: #636e72; margin-left: 8px; }
        details.group h4 { margin: 12px 0 4px 0; }
        details.group ul { margin: 4px 0; }
        a { color: #0984e3; }";

/// Minimal HTML escaping for text and attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// CSS class for a severity label; unknown labels get the neutral class.
pub(crate) fn severity_class(label: &str) -> &'static str {
    match label.to_ascii_lowercase().as_str() {
        "critical" => "critical",
        "high" => "high",
        "medium" => "medium",
        "low" => "low",
        _ => "info",
    }
}

/// Opens the document: doctype, head with inline styles, report header.
pub(crate) fn page_open(title: &str, data: &ReportData) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
             <meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{title}</title>\n\
             <style>\n{STYLE}\n    </style>\n\
         </head>\n\
         <body>\n\
             <div class=\"header\">\n\
                 <h1>{title}</h1>\n\
                 <p>Grouped by: {group_by}</p>\n\
             </div>\n",
        title = escape(title),
        group_by = data.group_by.label(),
    );
    html.push_str(&summary_section(data));
    html
}

pub(crate) fn page_close() -> &'static str {
    "</body>\n</html>\n"
}

/// Severity label → count badges, alphabetical by label.
pub(crate) fn severity_badges(counts: &BTreeMap<String, usize>) -> String {
    let mut html = String::from("<div class=\"badges\">");
    for (label, count) in counts {
        let _ = write!(
            html,
            "<span class=\"badge {class}\">{label}: {count}</span>",
            class = severity_class(label),
            label = escape(label),
        );
    }
    html.push_str("</div>\n");
    html
}

fn summary_section(data: &ReportData) -> String {
    let mut html = String::from("    <div class=\"statistics\">\n");
    for (value, caption) in [
        (data.total_issues, "Total Issues"),
        (data.total_groups, "Groups"),
        (data.fixable_count, "Fixable"),
    ] {
        let _ = write!(
            html,
            "        <div class=\"stat-box\"><h3>{value}</h3><p>{caption}</p></div>\n"
        );
    }
    html.push_str("    </div>\n");
    html.push_str(&severity_badges(&data.severity_counts));
    html
}

/// A titled list section inside a group accordion; empty lists render
/// nothing. `items` must already be escaped HTML fragments.
pub(crate) fn list_section(heading: &str, items: impl Iterator<Item = String>) -> String {
    let entries: Vec<String> = items.collect();
    if entries.is_empty() {
        return String::new();
    }
    let mut html = format!("<h4>{}</h4>\n<ul>\n", escape(heading));
    for entry in entries {
        let _ = write!(html, "<li>{entry}</li>\n");
    }
    html.push_str("</ul>\n");
    html
}
