//! Directory move implementation.
//! Tries a rename first; across filesystems, copies the tree and removes the source.

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::helpers::{build_message, io_error_with_help, is_cross_device};
use crate::errors::TakeoutFixError;

fn move_failed(src: &Path, dest: &Path, reason: impl Into<String>) -> anyhow::Error {
    TakeoutFixError::MoveFailed {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

/// Move `src_dir` to `target_dir/<src_dir name>` and return the new path.
///
/// An existing entry at the destination is an error; nothing is merged.
/// With `dry_run` only the intended move is logged.
pub fn move_dir_into(src_dir: &Path, target_dir: &Path, dry_run: bool) -> Result<PathBuf> {
    let src_name = src_dir
        .file_name()
        .ok_or_else(|| anyhow!("Source directory missing name: {}", src_dir.display()))?;
    let dest = target_dir.join(src_name);

    if dry_run {
        info!(src = %src_dir.display(), dest = %dest.display(), "dry-run: would move directory");
        return Ok(dest);
    }

    if fs::symlink_metadata(&dest).is_ok() {
        return Err(move_failed(src_dir, &dest, "destination already exists"));
    }

    match fs::rename(src_dir, &dest) {
        Ok(()) => {
            debug!(src = %src_dir.display(), dest = %dest.display(), "Renamed directory atomically");
            Ok(dest)
        }
        Err(e) if is_cross_device(&e) => {
            warn!(src = %src_dir.display(), "Rename crosses filesystems; copying instead");
            if let Err(copy_err) = copy_tree(src_dir, &dest) {
                let _ = fs::remove_dir_all(&dest);
                return Err(move_failed(src_dir, &dest, copy_err.to_string()));
            }
            fs::remove_dir_all(src_dir)
                .map_err(io_error_with_help("remove source directory", src_dir))?;
            info!(src = %src_dir.display(), dest = %dest.display(), "Copied directory and removed source");
            Ok(dest)
        }
        Err(e) => Err(move_failed(src_dir, &dest, build_message("rename", src_dir, &e))),
    }
}

/// Sequential recursive copy of `src` into a new directory `dest`.
fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src)?;
        let target = dest.join(rel);
        if entry.file_type().is_symlink() {
            copy_link(entry.path(), &target)?;
        } else if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error_with_help("create directory", &target))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(io_error_with_help("create directory", parent))?;
            }
            fs::copy(entry.path(), &target)
                .map_err(io_error_with_help("copy file to destination", &target))?;
        }
    }
    Ok(())
}

/// Recreate the link itself; its target is neither followed nor copied.
#[cfg(unix)]
fn copy_link(src: &Path, target: &Path) -> Result<()> {
    let link = fs::read_link(src).map_err(io_error_with_help("read symlink", src))?;
    std::os::unix::fs::symlink(&link, target).map_err(io_error_with_help("create symlink", target))?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_link(src: &Path, _target: &Path) -> Result<()> {
    Err(anyhow!("Refusing to copy symlink across filesystems: {}", src.display()))
}
