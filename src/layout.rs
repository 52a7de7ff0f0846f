//! Export directory layout.
//!
//! Every path the tool reads or writes is derived from the resolved export root:
//!
//! ```text
//! <root>/Photos/Photos from <year>/
//! <root>/Albums/<album name>/
//! <root>/AlbumsProcessed/<album name>/
//! <root>/AlbumsError/<album name>/
//! <root>/PhotosProcessed/
//! <root>/PhotosError/
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Name prefix of the export subdirectory beneath the user-supplied path.
pub const ROOT_PREFIX: &str = "Google";
/// Name prefix of a dated photos folder.
pub const DATED_PHOTOS_PREFIX: &str = "Photos from ";

pub const PHOTOS_DIR: &str = "Photos";
pub const ALBUMS_DIR: &str = "Albums";
pub const PHOTOS_PROCESSED_DIR: &str = "PhotosProcessed";
pub const PHOTOS_ERROR_DIR: &str = "PhotosError";
pub const ALBUMS_PROCESSED_DIR: &str = "AlbumsProcessed";
pub const ALBUMS_ERROR_DIR: &str = "AlbumsError";

/// Top-level names owned by this tool; never treated as albums.
pub const RESERVED_NAMES: [&str; 6] = [
    PHOTOS_DIR,
    ALBUMS_DIR,
    PHOTOS_PROCESSED_DIR,
    PHOTOS_ERROR_DIR,
    ALBUMS_PROCESSED_DIR,
    ALBUMS_ERROR_DIR,
];

/// A dated photos folder is named "Photos from <anything>" (glob `Photos from *`).
pub fn is_dated_photos_folder(name: &OsStr) -> bool {
    name.to_str()
        .map(|n| n.starts_with(DATED_PHOTOS_PREFIX))
        .unwrap_or(false)
}

pub fn is_reserved(name: &OsStr) -> bool {
    RESERVED_NAMES.iter().any(|r| name == OsStr::new(r))
}

/// The three directories handed to one metadata-fix invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixDirs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub error: PathBuf,
}

/// Paths derived from a resolved export root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    root: PathBuf,
}

impl ExportLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn photos_dir(&self) -> PathBuf {
        self.root.join(PHOTOS_DIR)
    }

    pub fn albums_dir(&self) -> PathBuf {
        self.root.join(ALBUMS_DIR)
    }

    /// Input/output/error directories for the Photos group as a whole.
    pub fn photos_fix_dirs(&self) -> FixDirs {
        FixDirs {
            input: self.photos_dir(),
            output: self.root.join(PHOTOS_PROCESSED_DIR),
            error: self.root.join(PHOTOS_ERROR_DIR),
        }
    }

    /// Input/output/error directories for one album, named after it.
    pub fn album_fix_dirs(&self, album_name: &OsStr) -> FixDirs {
        FixDirs {
            input: self.albums_dir().join(album_name),
            output: self.root.join(ALBUMS_PROCESSED_DIR).join(album_name),
            error: self.root.join(ALBUMS_ERROR_DIR).join(album_name),
        }
    }
}
