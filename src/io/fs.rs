//! Filesystem access: markdown detection, posts-directory enumeration,
//! contextual reads and atomic writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::error::{RestampError, Result};

pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|s| s == "md" || s == "markdown")
        .unwrap_or(false)
}

/// Markdown files directly inside `dir`, sorted for stable output.
///
/// Posts live flat in the posts directory; nested directories hold assets
/// and are not descended into. A missing or unreadable directory is an
/// error here, unlike resolver failures in diff mode.
pub fn scan_posts_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|e| RestampError::scan(dir, e))?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.path().to_owned());
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| RestampError::read(path, e))
}

/// Write via a temporary file in the same directory, then rename over the
/// target, so an interrupted run never leaves a half-written post behind.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| RestampError::write(path, e))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| RestampError::write(path, e))?;
    temp_file.flush().map_err(|e| RestampError::write(path, e))?;
    temp_file
        .persist(path)
        .map_err(|e| RestampError::write(path, e.error))?;

    Ok(())
}
