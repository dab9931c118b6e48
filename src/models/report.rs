//! Per-file validation reports and the aggregate summary.

use serde::Serialize;

use crate::models::mismatch::Mismatch;

/// The outcome of validating one actual config file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Display path of the validated file.
    pub file: String,
    /// Rule violations, in reference-config order.
    pub mismatches: Vec<Mismatch>,
}

impl ValidationReport {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            mismatches: Vec::new(),
        }
    }

    /// Append one violation.
    pub fn record(&mut self, mismatch: Mismatch) {
        self.mismatches.push(mismatch);
    }

    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// 1 if any mismatch was recorded, 0 otherwise.
    pub fn flag(&self) -> u8 {
        if self.mismatches.is_empty() { 0 } else { 1 }
    }
}

/// Combined flag across files: the maximum (logical OR) of each file's flag.
pub fn overall_flag(reports: &[ValidationReport]) -> u8 {
    reports.iter().map(ValidationReport::flag).max().unwrap_or(0)
}

/// Aggregate counts for a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub files: usize,
    pub passed: usize,
    pub failed: usize,
    pub mismatches: usize,
}

impl Summary {
    /// Compute summary from a list of reports.
    pub fn from_reports(reports: &[ValidationReport]) -> Self {
        let mut s = Summary::default();
        for report in reports {
            s.files += 1;
            if report.passed() {
                s.passed += 1;
            } else {
                s.failed += 1;
            }
            s.mismatches += report.mismatches.len();
        }
        s
    }
}
