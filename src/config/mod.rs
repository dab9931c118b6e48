//! Tool settings loading and layering.
//!
//! Handles `.cfgcheck.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering. These settings
//! configure the checker itself, not the configs it validates.

pub mod loader;

pub use loader::{CheckConfig, Config, ConfigError};
