//! Mismatch types representing validation results.

use serde::Serialize;
use std::fmt;

/// The way an actual config deviated from the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchKind {
    /// A section with at least one required key is absent entirely.
    SectionMissing,
    /// A required key is absent from its section.
    KeyMissing,
    /// A key marked must-be-absent is present.
    Forbidden,
    /// The key is present with the wrong value.
    ValueDiffers { actual: String, expected: String },
}

/// A single rule violation found while validating one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// The section the rule applies to.
    pub section: String,
    /// The key the rule applies to; `None` for whole-section violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(flatten)]
    pub kind: MismatchKind,
}

impl Mismatch {
    pub fn section_missing(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: None,
            kind: MismatchKind::SectionMissing,
        }
    }

    pub fn key_missing(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: Some(key.into()),
            kind: MismatchKind::KeyMissing,
        }
    }

    pub fn forbidden(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: Some(key.into()),
            kind: MismatchKind::Forbidden,
        }
    }

    pub fn value_differs(
        section: impl Into<String>,
        key: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            key: Some(key.into()),
            kind: MismatchKind::ValueDiffers {
                actual: actual.into(),
                expected: expected.into(),
            },
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.as_deref().unwrap_or("");
        match &self.kind {
            MismatchKind::SectionMissing => {
                write!(f, "Section [{}] is missing", self.section)
            }
            MismatchKind::KeyMissing => {
                write!(f, "'{}' is missing in section [{}]", key, self.section)
            }
            MismatchKind::Forbidden => {
                write!(
                    f,
                    "'{}' should not be present in section [{}]",
                    key, self.section
                )
            }
            MismatchKind::ValueDiffers { actual, expected } => {
                write!(
                    f,
                    "'{}' in section [{}] is '{}', expected '{}'",
                    key, self.section, actual, expected
                )
            }
        }
    }
}
