// tests/unit_aggregate.rs
use vulnsight_core::aggregate::{self, Groups};
use vulnsight_core::types::{GroupBy, IssueRecord};

fn issue(title: &str, severity: &str, cves: &[&str], cwes: &[&str]) -> IssueRecord {
    IssueRecord {
        issue_severity_rank: 3,
        issue_severity: severity.to_string(),
        score: 500,
        problem_title: title.to_string(),
        cve: cves.iter().map(|s| s.to_string()).collect(),
        cve_url: Vec::new(),
        cwe: cwes.iter().map(|s| s.to_string()).collect(),
        project_name: "acme/webapp".to_string(),
        project_url: "https://app.example/webapp".to_string(),
        exploit_maturity: None,
        computed_fixability: "No Fix Available".to_string(),
        first_introduced: None,
        product_name: None,
        issue_url: "https://app.example/issue/1".to_string(),
        issue_status_indicator: "Open".to_string(),
        issue_type: "Vulnerability".to_string(),
    }
}

fn cve_cwe_groups(data: aggregate::ReportData) -> Vec<vulnsight_core::aggregate::CveCweGroup> {
    match data.groups {
        Groups::CveCwe(groups) => groups,
        Groups::Project(_) => panic!("expected cve-cwe groups"),
    }
}

#[test]
fn cartesian_product_expands_to_every_pair() {
    let issues = vec![issue("Title", "High", &["CVE-1", "CVE-2"], &["CWE-A"])];
    let data = aggregate::prepare(&issues, GroupBy::CveCwe);
    let groups = cve_cwe_groups(data);

    assert_eq!(groups.len(), 2);
    let keys: Vec<(&str, &str)> = groups
        .iter()
        .map(|g| (g.cve.as_str(), g.cwe.as_str()))
        .collect();
    assert!(keys.contains(&("CVE-1", "CWE-A")));
    assert!(keys.contains(&("CVE-2", "CWE-A")));
    for group in &groups {
        assert_eq!(group.total_issues, 1);
        assert_eq!(group.severity_counts.get("High"), Some(&1));
    }
}

#[test]
fn two_by_three_lands_in_six_groups() {
    let issues = vec![issue(
        "Title",
        "Medium",
        &["CVE-1", "CVE-2"],
        &["CWE-A", "CWE-B", "CWE-C"],
    )];
    let data = aggregate::prepare(&issues, GroupBy::CveCwe);

    // Group tallies are views, not a partition: one issue, six groups.
    assert_eq!(data.total_issues, 1);
    assert_eq!(data.total_groups, 6);
}

#[test]
fn empty_identifier_lists_use_sentinels() {
    let issues = vec![issue("Title", "Low", &[], &[])];
    let data = aggregate::prepare(&issues, GroupBy::CveCwe);
    let groups = cve_cwe_groups(data);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].cve, "No CVE");
    assert_eq!(groups[0].cwe, "No CWE");
}

#[test]
fn groups_sort_by_descending_issue_count() {
    // Encounter order: A (3 issues), B (1 issue), C (5 issues).
    let mut issues = Vec::new();
    for _ in 0..3 {
        issues.push(issue("Title", "High", &["CVE-A"], &["CWE-1"]));
    }
    issues.push(issue("Title", "High", &["CVE-B"], &["CWE-1"]));
    for _ in 0..5 {
        issues.push(issue("Title", "High", &["CVE-C"], &["CWE-1"]));
    }

    let data = aggregate::prepare(&issues, GroupBy::CveCwe);
    let counts: Vec<usize> = cve_cwe_groups(data)
        .iter()
        .map(|g| g.total_issues)
        .collect();
    assert_eq!(counts, vec![5, 3, 1]);
}

#[test]
fn equal_counts_keep_first_seen_order() {
    let issues = vec![
        issue("Title", "High", &["CVE-Z"], &["CWE-1"]),
        issue("Title", "High", &["CVE-A"], &["CWE-1"]),
        issue("Title", "High", &["CVE-M"], &["CWE-1"]),
    ];
    let data = aggregate::prepare(&issues, GroupBy::CveCwe);
    let cves: Vec<String> = cve_cwe_groups(data).into_iter().map(|g| g.cve).collect();
    assert_eq!(cves, vec!["CVE-Z", "CVE-A", "CVE-M"]);
}

#[test]
fn fixable_count_requires_the_exact_literal() {
    let mut fixable = issue("Title", "High", &["CVE-1"], &["CWE-A"]);
    fixable.computed_fixability = "Fixable".to_string();
    let mut lowercase = issue("Title", "High", &["CVE-1"], &["CWE-A"]);
    lowercase.computed_fixability = "fixable".to_string();
    let mut partial = issue("Title", "High", &["CVE-1"], &["CWE-A"]);
    partial.computed_fixability = "Partially Fixable".to_string();

    let data = aggregate::prepare(&[fixable, lowercase, partial], GroupBy::CveCwe);
    assert_eq!(data.fixable_count, 1);
    assert_eq!(cve_cwe_groups(data)[0].fixable_count, 1);
}

#[test]
fn global_severity_histogram_counts_labels() {
    let issues = vec![
        issue("Title", "High", &["CVE-1"], &["CWE-A"]),
        issue("Title", "High", &["CVE-2"], &["CWE-A"]),
        issue("Title", "Low", &["CVE-3"], &["CWE-A"]),
    ];
    let data = aggregate::prepare(&issues, GroupBy::CveCwe);
    assert_eq!(data.severity_counts.get("High"), Some(&2));
    assert_eq!(data.severity_counts.get("Low"), Some(&1));
    assert_eq!(data.total_issues, 3);
}

#[test]
fn group_members_come_back_sorted() {
    let mut first = issue("Zeta overflow", "High", &["CVE-1"], &["CWE-A"]);
    first.project_name = "zulu/service".to_string();
    let mut second = issue("Alpha injection", "High", &["CVE-1"], &["CWE-A"]);
    second.project_name = "alpha/service".to_string();

    let data = aggregate::prepare(&[first, second], GroupBy::CveCwe);
    let groups = cve_cwe_groups(data);
    assert_eq!(groups[0].problem_titles, vec!["Alpha injection", "Zeta overflow"]);
    let names: Vec<&str> = groups[0].projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["alpha/service", "zulu/service"]);
}

#[test]
fn recurring_project_name_keeps_last_url() {
    let mut first = issue("Title", "High", &["CVE-1"], &["CWE-A"]);
    first.project_url = "https://app.example/old".to_string();
    let mut second = issue("Title", "High", &["CVE-1"], &["CWE-A"]);
    second.project_url = "https://app.example/new".to_string();

    let data = aggregate::prepare(&[first, second], GroupBy::CveCwe);
    let groups = cve_cwe_groups(data);
    assert_eq!(groups[0].projects.len(), 1);
    assert_eq!(groups[0].projects[0].url, "https://app.example/new");
}

#[test]
fn project_strategy_groups_by_name_and_url() {
    let mut webapp = issue("Title", "High", &["CVE-1", "CVE-2"], &["CWE-A"]);
    webapp.computed_fixability = "Fixable".to_string();
    let mut api = issue("Other", "Low", &[], &[]);
    api.project_name = "acme/api".to_string();
    api.project_url = "https://app.example/api".to_string();

    let data = aggregate::prepare(&[webapp, api], GroupBy::Project);
    assert_eq!(data.total_groups, 2);
    let groups = match data.groups {
        Groups::Project(groups) => groups,
        Groups::CveCwe(_) => panic!("expected project groups"),
    };

    assert_eq!(groups[0].project_name, "acme/webapp");
    assert_eq!(
        groups[0].cve_cwe_pairs,
        vec!["CVE-1 + CWE-A", "CVE-2 + CWE-A"]
    );
    assert_eq!(groups[0].fixable_count, 1);
    assert_eq!(groups[1].cve_cwe_pairs, vec!["No CVE + No CWE"]);
}

#[test]
fn empty_input_produces_empty_report_data() {
    let data = aggregate::prepare(&[], GroupBy::CveCwe);
    assert_eq!(data.total_issues, 0);
    assert_eq!(data.total_groups, 0);
    assert!(data.groups.is_empty());
    assert!(data.severity_counts.is_empty());
    assert_eq!(data.fixable_count, 0);
}
