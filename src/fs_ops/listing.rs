//! Directory listing with shell-glob semantics.
//!
//! `dir/*` never matches names starting with `.`, and `dir/*/` only matches
//! directories (following symlinks). Results are sorted by file name so
//! "first match" and processing order do not depend on the filesystem.
//! A missing directory simply has no matches.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().map(|n| n.starts_with('.')).unwrap_or(false)
}

/// Equivalent of `glob("dir/*")`.
pub fn visible_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("list directory '{}'", dir.display()))?;
        if !is_hidden(entry.file_name()) {
            out.push(entry.into_path());
        }
    }
    Ok(out)
}

/// Equivalent of `glob("dir/*/")`.
pub fn visible_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(visible_entries(dir)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect())
}

/// True when `glob("dir/*")` would match anything.
pub fn has_visible_entries(dir: &Path) -> Result<bool> {
    Ok(!visible_entries(dir)?.is_empty())
}
