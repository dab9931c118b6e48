//! Terminal renderer: styled flowing text grouped by file.

use colored::Colorize;

use crate::models::report::{Summary, ValidationReport, overall_flag};
use crate::output::ReportRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer {
    /// Skip the per-file success lines; failing files and the summary
    /// still print.
    pub quiet: bool,
}

impl ReportRenderer for TerminalRenderer {
    fn render(&self, reports: &[ValidationReport]) -> String {
        let mut output = String::new();

        for report in reports {
            if report.passed() {
                if !self.quiet {
                    output.push_str(&format!(
                        " {} {} — all parameters match\n",
                        "✔".green().bold(),
                        report.file.bold(),
                    ));
                }
                continue;
            }

            output.push_str(&format!(
                " {} {} — {} mismatch(es)\n",
                "✖".red().bold(),
                report.file.bold(),
                report.mismatches.len(),
            ));
            for mismatch in &report.mismatches {
                output.push_str(&format!("     {mismatch}\n"));
            }
        }

        let summary = Summary::from_reports(reports);
        output.push_str(&format!(
            "{}\n",
            "───────────────────────────────────".dimmed()
        ));
        output.push_str(&format!(
            " {} file(s) checked: {} passed, {} failed, {} mismatch(es)\n",
            summary.files.to_string().bold(),
            summary.passed.to_string().green().bold(),
            summary.failed.to_string().red().bold(),
            summary.mismatches,
        ));
        output.push_str(&format!(" overall flag: {}\n", overall_flag(reports)));

        output
    }
}
