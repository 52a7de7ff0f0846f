//! Export root resolution.
//!
//! An archive export unpacks to `<input>/<Brand ...>/`; the tool works on that
//! single subdirectory. The first match in name order wins.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::TakeoutFixError;
use crate::fs_ops::visible_subdirs;
use crate::layout::ROOT_PREFIX;

/// Find the directory directly under `input` whose name starts with `prefix`.
pub fn resolve_root_with_prefix(input: &Path, prefix: &str) -> Result<PathBuf> {
    let candidates: Vec<PathBuf> = visible_subdirs(input)?
        .into_iter()
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(prefix))
                .unwrap_or(false)
        })
        .collect();
    debug!(input = %input.display(), count = candidates.len(), "export root candidates");

    let root = candidates
        .into_iter()
        .next()
        .ok_or_else(|| TakeoutFixError::RootNotFound {
            input: input.to_path_buf(),
            prefix: prefix.to_string(),
        })?;
    info!(root = %root.display(), "Resolved export root");
    Ok(root)
}

/// Find the export root beneath the user-supplied takeout folder.
pub fn resolve_export_root(input: &Path) -> Result<PathBuf> {
    resolve_root_with_prefix(input, ROOT_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn picks_first_match_in_name_order() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("Google Photos").create_dir_all().unwrap();
        td.child("Google Fotos").create_dir_all().unwrap();
        td.child("archive_browser.html").touch().unwrap();

        let root = resolve_export_root(td.path()).unwrap();
        assert_eq!(root, td.path().join("Google Fotos"));
        assert!(!root.to_string_lossy().ends_with('/'));
    }

    #[test]
    fn files_do_not_match() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("Google Photos.zip").touch().unwrap();
        let err = resolve_export_root(td.path()).unwrap_err();
        assert_eq!(err.downcast_ref::<TakeoutFixError>().map(|e| e.kind()), Some("root_not_found"));
    }

    #[test]
    fn missing_input_is_root_not_found() {
        let td = assert_fs::TempDir::new().unwrap();
        let err = resolve_export_root(&td.path().join("Takeout")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TakeoutFixError>(),
            Some(TakeoutFixError::RootNotFound { .. })
        ));
    }
}
