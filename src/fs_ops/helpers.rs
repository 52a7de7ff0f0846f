//! I/O helper utilities.
//!
//! Enrich io::Error with the operation, the path and a platform-aware hint,
//! usable with map_err in anyhow::Result code paths:
//!
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
pub(crate) fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" (permission denied; check ownership and write permissions)");
                }
                libc::EXDEV => {
                    msg.push_str(" (cross-filesystem; atomic rename not possible)");
                }
                libc::EBUSY => {
                    msg.push_str(" (resource busy; another process may be using it)");
                }
                libc::ENOENT => {
                    msg.push_str(" (path not found; was the export tree changed while running?)");
                }
                libc::EEXIST | libc::ENOTEMPTY => {
                    msg.push_str(" (already exists; remove or rename the existing entry)");
                }
                libc::ENOSPC => {
                    msg.push_str(" (insufficient space on device)");
                }
                libc::EROFS => {
                    msg.push_str(" (read-only filesystem)");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str(" (filename or path too long)");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" (access denied; check permissions)"),
                17 => msg.push_str(" (not same device; cross-filesystem move)"),
                32 => msg.push_str(" (sharing violation; file is in use)"),
                2 | 3 => msg.push_str(" (path not found)"),
                80 | 183 => msg.push_str(" (already exists)"),
                112 => msg.push_str(" (insufficient disk space)"),
                206 => msg.push_str(" (filename or path too long)"),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" (permission denied; check ownership and write permissions)");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" (path not found)");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str(" (already exists; remove or rename the existing entry)");
            }
            _ => {}
        }
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// True when a rename failed only because source and destination are on different filesystems.
pub(crate) fn is_cross_device(e: &io::Error) -> bool {
    match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => code == libc::EXDEV,
        // ERROR_NOT_SAME_DEVICE
        #[cfg(windows)]
        Some(code) => code == 17,
        #[cfg(not(any(unix, windows)))]
        Some(_) => false,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_op_and_path() {
        let e = io::Error::new(io::ErrorKind::NotFound, "gone");
        let msg = build_message("read directory", Path::new("/x/Albums"), &e);
        assert!(msg.starts_with("read directory '/x/Albums': gone"));
        assert!(msg.contains("path not found"));
    }

    #[cfg(unix)]
    #[test]
    fn raw_codes_get_hints() {
        let e = io::Error::from_raw_os_error(libc::EXDEV);
        assert!(is_cross_device(&e));
        let msg = build_message("rename", Path::new("/a"), &e);
        assert!(msg.contains("cross-filesystem"));
        assert!(msg.contains(&format!("[os code: {}]", libc::EXDEV)));

        let e = io::Error::from_raw_os_error(libc::EACCES);
        assert!(!is_cross_device(&e));
    }
}
