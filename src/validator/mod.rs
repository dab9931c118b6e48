//! Config validation: compare an actual config against the reference.
//!
//! Pure single-pass walk over the reference config. Keys that exist only
//! in the actual file are never reported, so deployments may carry extra
//! parameters.

use indexmap::IndexMap;

use crate::models::{ConfigMap, Expectation, ExpectedConfig, Mismatch, SectionMap, ValidationReport};

/// Validate one actual config against the compiled reference.
///
/// `label` identifies the actual file in the returned report. Mismatches
/// are recorded in reference order. Absence rules are checked first and
/// independently: a missing section satisfies every must-be-absent key it
/// was expected to not contain.
pub fn validate(actual: &ConfigMap, expected: &ExpectedConfig, label: &str) -> ValidationReport {
    let mut report = ValidationReport::new(label);

    for (section, entries) in expected.sections() {
        match actual.get(section) {
            None => {
                // One mismatch covers every required key of the section.
                // A section made up entirely of must-be-absent keys is
                // allowed to be wholly absent.
                if section_required(entries) {
                    report.record(Mismatch::section_missing(section));
                }
            }
            Some(actual_entries) => {
                for (key, expectation) in entries {
                    check_key(&mut report, section, key, expectation, actual_entries);
                }
            }
        }
    }

    report
}

/// Check one key of a section that is present in the actual config.
fn check_key(
    report: &mut ValidationReport,
    section: &str,
    key: &str,
    expectation: &Expectation,
    actual_entries: &SectionMap,
) {
    match expectation {
        Expectation::MustBeAbsent => {
            if actual_entries.contains_key(key) {
                report.record(Mismatch::forbidden(section, key));
            }
        }
        Expectation::Exact(expected_value) => match actual_entries.get(key) {
            None => report.record(Mismatch::key_missing(section, key)),
            Some(actual_value) if actual_value != expected_value => {
                report.record(Mismatch::value_differs(
                    section,
                    key,
                    actual_value,
                    expected_value,
                ));
            }
            Some(_) => {}
        },
    }
}

/// True if the section demands at least one present key.
fn section_required(entries: &IndexMap<String, Expectation>) -> bool {
    entries
        .values()
        .any(|e| matches!(e, Expectation::Exact(_)))
}
