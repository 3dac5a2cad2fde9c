use crate::types::GroupBy;
use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  vulnsight issues.csv                                  # writes output/report_cve_cwe.html
  vulnsight issues.csv --group-by project               # writes output/report_project.html
  vulnsight issues.csv -o custom/report.html            # custom output path
  vulnsight issues.csv --group-by project -o proj.html  # custom output with project grouping";

#[derive(Parser)]
#[command(
    name = "vulnsight",
    version,
    about = "HTML reports from security-scanner CSV exports",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Path to the CSV export to read
    pub csv_file: PathBuf,

    /// Output HTML file path (default: output/report_<groupby>.html)
    #[arg(long, short, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Group issues by CVE-CWE pairs or by project
    #[arg(long, value_enum, default_value_t = GroupBy::CveCwe)]
    pub group_by: GroupBy,
}
