//! Default path helpers and symlink checks.
//! Determines the config/log paths and detects symlinked ancestors for safety.

use anyhow::{anyhow, Result};
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV;

/// Config file path in effect.
///
/// `$TAKEOUT_FIX_CONFIG` wins when set (relative values are resolved against the
/// current directory); otherwise `<config_dir>/takeout_fix/config.xml`.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(raw) = env::var_os(CONFIG_ENV) {
        let p = PathBuf::from(raw);
        if p.is_absolute() {
            return Ok(p);
        }
        return Ok(env::current_dir()?.join(p));
    }
    if let Some(mut base) = config_dir() {
        base.push("takeout_fix");
        base.push("config.xml");
        return Ok(base);
    }
    env::var_os("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("takeout_fix")
                .join("config.xml")
        })
        .ok_or_else(|| anyhow!("cannot determine a config directory (no config dir and no HOME)"))
}

/// Suggested log file location (data dir). Only used to fill the config template.
pub fn default_log_path() -> Result<PathBuf> {
    let base = data_dir()
        .or_else(|| env::var_os("HOME").map(|h| PathBuf::from(h).join(".local").join("share")))
        .ok_or_else(|| anyhow!("cannot determine a data directory"))?;
    Ok(base.join("takeout_fix").join("takeout_fix.log"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
