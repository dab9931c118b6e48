//! Configuration file reading.
//!
//! [`read`] wraps the pure string parser with file I/O and path-carrying
//! errors. A file that cannot be opened or parsed fails the whole run;
//! there is no partial or best-effort read.

pub mod parser;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::ConfigMap;

pub use parser::{ParseError, parse_cfg};

/// Errors while reading a configuration file.
#[derive(Error, Debug)]
pub enum CfgError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
}

/// Read and parse one configuration file.
pub fn read(path: &Path) -> Result<ConfigMap, CfgError> {
    let content = std::fs::read_to_string(path).map_err(|e| CfgError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    parser::parse_cfg(&content).map_err(|e| CfgError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
