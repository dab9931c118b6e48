//! Output renderers: terminal, JSON, GitHub Actions annotations.

pub mod github;
pub mod json;
pub mod terminal;

use crate::models::ValidationReport;

/// Trait for rendering validation reports to an output format.
pub trait ReportRenderer {
    /// Render reports to a string.
    fn render(&self, reports: &[ValidationReport]) -> String;
}
