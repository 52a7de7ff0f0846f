//! Album and Photos processing, and the full pipeline.
//!
//! Processing is strictly sequential. A tool failure on one album aborts the
//! rest of the batch; nothing is isolated per album.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::fixer::{fix_metadata, FixOutcome};
use crate::fs_ops::visible_subdirs;
use crate::layout::ExportLayout;
use crate::resolve::resolve_export_root;
use crate::restructure::{restructure, RestructureReport};
use crate::shutdown;
use crate::tools::ToolRunner;

/// Result of a metadata fix for one album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumResult {
    pub name: String,
    pub outcome: FixOutcome,
}

/// Everything a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub root: PathBuf,
    pub restructure: RestructureReport,
    pub albums: Vec<AlbumResult>,
    pub photos: FixOutcome,
}

/// Fix every album folder under `<root>/Albums`, in name order.
pub fn process_albums<R: ToolRunner + ?Sized>(
    layout: &ExportLayout,
    runner: &mut R,
    dry_run: bool,
) -> Result<Vec<AlbumResult>> {
    process_albums_with_plan(layout, &[], runner, dry_run)
}

/// Like [`process_albums`]; under dry-run the `planned` album paths, which a
/// previewed restructure never created, are visited too.
pub fn process_albums_with_plan<R: ToolRunner + ?Sized>(
    layout: &ExportLayout,
    planned: &[PathBuf],
    runner: &mut R,
    dry_run: bool,
) -> Result<Vec<AlbumResult>> {
    let albums_dir = layout.albums_dir();
    let mut albums = visible_subdirs(&albums_dir)?;
    if dry_run {
        for p in planned {
            if !albums.contains(p) {
                albums.push(p.clone());
            }
        }
        albums.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    if albums.is_empty() {
        warn!(dir = %albums_dir.display(), "No albums found at {}", albums_dir.display());
    }

    let mut results = Vec::with_capacity(albums.len());
    for album in &albums {
        shutdown::check()?;
        let Some(name) = album.file_name() else {
            continue;
        };
        info!(album = %name.to_string_lossy(), "Processing album {}...", album.display());
        let outcome = fix_metadata(runner, &layout.album_fix_dirs(name), true, dry_run)?;
        results.push(AlbumResult {
            name: name.to_string_lossy().into_owned(),
            outcome,
        });
    }
    Ok(results)
}

/// Fix the Photos group as a single batch.
pub fn process_photos<R: ToolRunner + ?Sized>(
    layout: &ExportLayout,
    runner: &mut R,
    dry_run: bool,
) -> Result<FixOutcome> {
    shutdown::check()?;
    info!("Processing photos...");
    fix_metadata(runner, &layout.photos_fix_dirs(), true, dry_run)
}

/// Resolve the export root under `input`, restructure it, then fix albums and photos.
pub fn run_pipeline<R: ToolRunner + ?Sized>(
    input: &Path,
    runner: &mut R,
    dry_run: bool,
) -> Result<RunSummary> {
    let root = resolve_export_root(input)?;
    let layout = ExportLayout::new(&root);

    let restructure = restructure(&layout, dry_run)?;
    let albums = process_albums_with_plan(&layout, &restructure.planned_albums, runner, dry_run)?;
    let photos = process_photos(&layout, runner, dry_run)?;

    Ok(RunSummary {
        root,
        restructure,
        albums,
        photos,
    })
}
