//! Filesystem operations: glob-style listing, directory moves and error hints.

mod dir_move;
mod helpers;
mod listing;

pub use dir_move::move_dir_into;
pub use helpers::io_error_with_help;
pub use listing::{has_visible_entries, visible_entries, visible_subdirs};

use anyhow::Result;
use std::path::Path;
use tracing::info;

/// `mkdir -p` that only logs under dry-run.
pub fn ensure_dir(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        if !path.is_dir() {
            info!(action = "mkdir -p", path = %path.display(), "dry-run");
        }
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(io_error_with_help("create directory", path))
}
