//! Stylesheet handling for rendered reports.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Stylesheet embedded in the binary and used when no override is
/// configured.
pub const DEFAULT_STYLES: &str = include_str!("styles.css");

#[derive(Debug, Error)]
pub enum StylesheetError {
    #[error("stylesheet location '{}' is not a file", .0.display())]
    NotAFile(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read a stylesheet override from disk.
pub fn read_stylesheet(path: &Path) -> Result<String, StylesheetError> {
    if !path.is_file() {
        return Err(StylesheetError::NotAFile(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Resolve the stylesheet for a run: the configured override when present,
/// the embedded default otherwise.
pub fn resolve_stylesheet(override_path: Option<&Path>) -> Result<String, StylesheetError> {
    match override_path {
        Some(path) => {
            info!(stylesheet = %path.display(), "Using stylesheet override");
            read_stylesheet(path)
        }
        None => Ok(DEFAULT_STYLES.to_string()),
    }
}
