//! Shared types used across all modules.
//!
//! This module defines the core data structures for parsed configs,
//! expectations, mismatches, and per-file reports. Other modules import
//! from here rather than reaching into each other's internals.

pub mod expectation;
pub mod mismatch;
pub mod report;

use indexmap::IndexMap;

pub use expectation::{Expectation, ExpectedConfig};
pub use mismatch::{Mismatch, MismatchKind};
pub use report::{Summary, ValidationReport};

/// Keys and values of one `[section]`, in file order.
pub type SectionMap = IndexMap<String, String>;

/// A parsed configuration file: section name → key → value.
///
/// Keys are case-sensitive and values are plain strings. Insertion order
/// is preserved so reports walk the file top to bottom.
pub type ConfigMap = IndexMap<String, SectionMap>;
