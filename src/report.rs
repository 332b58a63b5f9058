//! Selection of the most recent report in a directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("VPAT location '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("VPAT location '{}' contains no files", .0.display())]
    EmptyDirectory(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Creation timestamp of an entry. Filesystems that do not record a birth
/// time fall back to the modification time.
fn creation_time(metadata: &fs::Metadata) -> io::Result<SystemTime> {
    metadata.created().or_else(|_| metadata.modified())
}

/// Return the direct child of `dir` with the latest creation timestamp.
///
/// Every entry is eligible regardless of name or extension, and the scan
/// does not recurse. Entries with equal timestamps are ordered by file name,
/// so the result does not depend on readdir enumeration order.
pub fn most_recent_report(dir: &Path) -> Result<PathBuf, SelectError> {
    if !dir.is_dir() {
        return Err(SelectError::NotADirectory(dir.to_path_buf()));
    }

    let mut entries: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let created = creation_time(&entry.metadata()?)?;
        entries.push((created, entry.path()));
    }

    if entries.is_empty() {
        return Err(SelectError::EmptyDirectory(dir.to_path_buf()));
    }

    entries.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| a.1.file_name().cmp(&b.1.file_name()))
    });

    let (_, path) = entries
        .pop()
        .ok_or_else(|| SelectError::EmptyDirectory(dir.to_path_buf()))?;
    info!(report = %path.display(), "Selected most recent VPAT");
    Ok(path)
}
