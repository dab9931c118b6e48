//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the default sentinel token so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "cfgcheck";

/// Crate version, as printed by `cfgcheck version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.cfgcheck.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".cfgcheck.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "cfgcheck";

/// Expected-value token marking a key that must not be present.
pub const DEFAULT_SENTINEL: &str = "SHOULD_NOT_BE_PRESENT";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_SENTINEL: &str = "CFGCHECK_SENTINEL";
pub const ENV_FORMAT: &str = "CFGCHECK_FORMAT";
pub const ENV_FAIL: &str = "CFGCHECK_FAIL";
