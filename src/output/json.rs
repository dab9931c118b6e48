//! JSON output renderer.
//!
//! Outputs `{"files": [...], "summary": {...}, "flag": 0|1}` so CI jobs
//! can gate on `flag` without parsing the human-readable text.

use crate::models::report::{Summary, ValidationReport, overall_flag};
use crate::output::ReportRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, reports: &[ValidationReport]) -> String {
        let files: Vec<serde_json::Value> = reports
            .iter()
            .map(|report| {
                let mismatches: Vec<serde_json::Value> = report
                    .mismatches
                    .iter()
                    .map(|m| {
                        let mut value = serde_json::to_value(m)
                            .unwrap_or_else(|_| serde_json::json!({}));
                        value["message"] = serde_json::Value::String(m.to_string());
                        value
                    })
                    .collect();

                serde_json::json!({
                    "file": report.file,
                    "flag": report.flag(),
                    "mismatches": mismatches,
                })
            })
            .collect();

        let output = serde_json::json!({
            "files": files,
            "summary": Summary::from_reports(reports),
            "flag": overall_flag(reports),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mismatch;

    #[test]
    fn render_json() {
        let mut report = ValidationReport::new("conf/stage.cfg");
        report.record(Mismatch::key_missing("cache", "ttl"));

        let renderer = JsonRenderer;
        let output = renderer.render(&[report]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["flag"], 1);
        assert_eq!(parsed["files"][0]["file"], "conf/stage.cfg");
        assert_eq!(parsed["files"][0]["flag"], 1);
        let mismatch = &parsed["files"][0]["mismatches"][0];
        assert_eq!(mismatch["kind"], "key_missing");
        assert_eq!(mismatch["section"], "cache");
        assert_eq!(mismatch["key"], "ttl");
        assert_eq!(mismatch["message"], "'ttl' is missing in section [cache]");
        assert_eq!(parsed["summary"]["mismatches"], 1);
    }

    #[test]
    fn render_empty_json() {
        let renderer = JsonRenderer;
        let output = renderer.render(&[]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["flag"], 0);
        assert_eq!(parsed["files"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["summary"]["files"], 0);
    }

    #[test]
    fn render_passing_file_has_zero_flag() {
        let renderer = JsonRenderer;
        let output = renderer.render(&[ValidationReport::new("conf/prod.cfg")]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["flag"], 0);
        assert_eq!(parsed["files"][0]["flag"], 0);
        assert_eq!(
            parsed["files"][0]["mismatches"].as_array().unwrap().len(),
            0
        );
    }
}
