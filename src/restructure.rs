//! Folder restructuring.
//!
//! Turns the flat export layout into two groups:
//!
//! ```text
//! <root>/Photos from 2008/   ->  <root>/Photos/Photos from 2008/
//! <root>/My Album/           ->  <root>/Albums/My Album/
//! ```
//!
//! Each group is only populated when its directory is missing or has no visible
//! entries. That check is a heuristic, not a completion marker: a run that died
//! after moving one folder is treated as finished on the next run.
//! Moves are not transactional; folders already moved stay moved on failure.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::fs_ops::{ensure_dir, has_visible_entries, move_dir_into, visible_subdirs};
use crate::layout::{is_dated_photos_folder, is_reserved, ExportLayout};
use crate::shutdown;

/// What `restructure_if_needed` did for one target group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestructureOutcome {
    /// Target already had visible entries; nothing was moved.
    AlreadyDone,
    /// Number of folders moved into the target.
    Moved(usize),
}

/// Outcome of both restructuring passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestructureReport {
    pub photos: RestructureOutcome,
    pub albums: RestructureOutcome,
    /// `Albums/<name>` for every folder pass 2 moved, or would move under dry-run.
    pub planned_albums: Vec<PathBuf>,
}

/// Move `folders` into `target_dir` unless `target_dir` already has visible entries.
pub fn restructure_if_needed(
    folders: &[PathBuf],
    target_dir: &Path,
    dry_run: bool,
) -> Result<RestructureOutcome> {
    if has_visible_entries(target_dir)? {
        info!(
            dir = %target_dir.display(),
            "{} exists and is non-empty, assuming no further restructuring is needed",
            target_dir.display()
        );
        return Ok(RestructureOutcome::AlreadyDone);
    }

    ensure_dir(target_dir, dry_run)?;

    if folders.is_empty() {
        warn!(dir = %target_dir.display(), "No folders were moved to {}", target_dir.display());
    }

    let mut moved = 0usize;
    for folder in folders {
        shutdown::check()?;
        move_dir_into(folder, target_dir, dry_run)?;
        moved += 1;
    }

    info!(dir = %target_dir.display(), count = moved, "Restructured {} folders", moved);
    Ok(RestructureOutcome::Moved(moved))
}

/// Run both passes: dated folders into Photos, everything else into Albums.
pub fn restructure(layout: &ExportLayout, dry_run: bool) -> Result<RestructureReport> {
    let root = layout.root();

    let dated: Vec<PathBuf> = visible_subdirs(root)?
        .into_iter()
        .filter(|p| p.file_name().map(is_dated_photos_folder).unwrap_or(false))
        .collect();
    let photos = restructure_if_needed(&dated, &layout.photos_dir(), dry_run)?;

    // Under dry-run the dated folders are still in place; keep them out of pass 2.
    let taken: &[PathBuf] = match photos {
        RestructureOutcome::Moved(_) => dated.as_slice(),
        RestructureOutcome::AlreadyDone => &[],
    };
    let remaining: Vec<PathBuf> = visible_subdirs(root)?
        .into_iter()
        .filter(|p| p.file_name().map(|n| !is_reserved(n)).unwrap_or(false))
        .filter(|p| !taken.contains(p))
        .collect();
    let albums_dir = layout.albums_dir();
    let albums = restructure_if_needed(&remaining, &albums_dir, dry_run)?;
    let planned_albums = match albums {
        RestructureOutcome::Moved(_) => remaining
            .iter()
            .filter_map(|p| p.file_name().map(|n| albums_dir.join(n)))
            .collect(),
        RestructureOutcome::AlreadyDone => Vec::new(),
    };

    Ok(RestructureReport {
        photos,
        albums,
        planned_albums,
    })
}
