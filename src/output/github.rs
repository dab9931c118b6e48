//! GitHub Actions annotation renderer.
//!
//! Emits one [workflow command](https://docs.github.com/en/actions/reference/workflow-commands-for-github-actions)
//! per mismatch. GitHub surfaces `::error file=...` lines as annotations
//! on the offending file in the checks UI.

use crate::models::ValidationReport;
use crate::output::ReportRenderer;

/// GitHub Actions workflow-command renderer.
pub struct GithubRenderer;

impl ReportRenderer for GithubRenderer {
    fn render(&self, reports: &[ValidationReport]) -> String {
        let mut output = String::new();

        for report in reports {
            for mismatch in &report.mismatches {
                output.push_str(&format!(
                    "::error file={},title=Config mismatch::{}\n",
                    escape_property(&report.file),
                    escape_data(&mismatch.to_string()),
                ));
            }
        }

        output
    }
}

/// Escape a message payload per the workflow-command rules.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property (also encodes `:` and `,`).
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
