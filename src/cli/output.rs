//! Output formatting utilities

use crate::application::RetagReport;
use crate::domain::{SubstitutionResult, SubstitutionStatus};

/// Format one report line for a target
pub fn format_result(result: &SubstitutionResult, dry_run: bool) -> String {
    let path = result.path.display();
    match &result.status {
        SubstitutionStatus::Success => {
            let verb = if dry_run { "would update" } else { "updated" };
            format!("{:<12} {} ({} replacement(s))", verb, path, result.replacements)
        }
        SubstitutionStatus::NotFound => format!("{:<12} {}", "not found", path),
        SubstitutionStatus::WriteError(reason) => {
            format!("{:<12} {}: {}", "error", path, reason)
        }
    }
}

/// Format the full report: one line per target, then a summary
pub fn format_report(report: &RetagReport) -> String {
    let mut output = String::new();
    for result in &report.results {
        output.push_str(&format_result(result, report.dry_run));
        output.push('\n');
    }

    let prefix = if report.dry_run { "Dry run: " } else { "" };
    output.push_str(&format!(
        "{}Retagged {} -> {}: {} updated, {} not found, {} failed.\n",
        prefix,
        report.pair.old(),
        report.pair.new_tag(),
        report.updated(),
        report.not_found(),
        report.failed()
    ));

    output
}
