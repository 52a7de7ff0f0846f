//! Platform-specific file helpers.
//! Hides the Unix/Windows differences for the two files this tool writes itself:
//! the optional log file and the config template.

use anyhow::{bail, Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Open log file for appending; new files are created 0600 on Unix.
/// An existing file keeps its permissions.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let mut opts = OpenOptions::new();
    opts.create(true).append(true);
    #[cfg(unix)]
    opts.mode(0o600);
    opts.open(path)
}

/// Write a new file atomically: temp sibling (0600 on Unix) + fsync + rename.
/// Fails if `path` already exists.
pub fn write_new_file_secure(path: &Path, contents: &[u8]) -> Result<()> {
    if path.exists() {
        bail!("File already exists: {}", path.display());
    }
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no parent"))?;
    fs::create_dir_all(parent).with_context(|| format!("create parent '{}'", parent.display()))?;
    #[cfg(unix)]
    {
        let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
    }

    let tmp = tmp_sibling_name(path);
    let mut opts = OpenOptions::new();
    opts.write(true).create_new(true);
    #[cfg(unix)]
    opts.mode(0o600);
    let mut f = opts
        .open(&tmp)
        .with_context(|| format!("create temp '{}'", tmp.display()))?;
    f.write_all(contents).context("write temp")?;
    f.sync_all().context("fsync temp")?;
    drop(f);

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("rename '{}' -> '{}'", tmp.display(), path.display()));
    }
    Ok(())
}

fn tmp_sibling_name(target: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    target
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!(".takeout_fix.tmp.{pid}.{nanos}"))
}
