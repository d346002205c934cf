use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Lists the regular files directly inside `dir`, sorted by name
///
/// Subdirectories are skipped; the listing is not recursive.
///
/// # Errors
///
/// Returns an error if:
/// - `dir` is not a directory
/// - The directory or one of its entries cannot be read
pub fn list_record_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Creates the parent directory of an output path if it is missing
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }
    Ok(())
}
