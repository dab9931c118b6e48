//! Expected-side model: compiled expectations instead of magic strings.
//!
//! The reference file encodes "this key must not exist" as a reserved
//! value token. Compilation turns that stringly-typed convention into a
//! tagged variant once, so the validator never compares against the
//! token itself.

use indexmap::IndexMap;

use crate::models::ConfigMap;

/// What the reference config demands of a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// The key must be present with exactly this value.
    Exact(String),
    /// The key must not appear in the actual config.
    MustBeAbsent,
}

/// A reference configuration compiled for validation.
///
/// Built from a parsed [`ConfigMap`] by [`ExpectedConfig::from_map`]:
/// values equal to the sentinel token become [`Expectation::MustBeAbsent`],
/// everything else [`Expectation::Exact`]. Section and key order follow
/// the reference file.
#[derive(Debug, Clone, Default)]
pub struct ExpectedConfig {
    sections: IndexMap<String, IndexMap<String, Expectation>>,
}

impl ExpectedConfig {
    /// Compile a parsed reference config using the given sentinel token.
    ///
    /// Sentinel matching is exact: case-sensitive, no trimming beyond
    /// what the reader already did.
    pub fn from_map(map: &ConfigMap, sentinel: &str) -> Self {
        let sections = map
            .iter()
            .map(|(section, entries)| {
                let compiled = entries
                    .iter()
                    .map(|(key, value)| {
                        let expectation = if value == sentinel {
                            Expectation::MustBeAbsent
                        } else {
                            Expectation::Exact(value.clone())
                        };
                        (key.clone(), expectation)
                    })
                    .collect();
                (section.clone(), compiled)
            })
            .collect();

        Self { sections }
    }

    /// Iterate sections in reference-file order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &IndexMap<String, Expectation>)> {
        self.sections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }

    /// Number of sections in the reference.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
