//! External tool invocation.
//!
//! The fix routine only talks to a [`ToolRunner`]; the binary uses
//! [`SystemRunner`], which spawns the configured programs and blocks until they exit.
//! Tests substitute recording fakes.

mod command;
mod system;

pub use command::{edit_command, repair_command, CommandSpec};
pub use system::SystemRunner;

use anyhow::Result;
use std::path::Path;

use crate::layout::FixDirs;

/// The two external collaborators of a metadata fix.
///
/// Both calls are synchronous. A tool that ran but exited non-zero must be
/// reported as an error; files the repair tool could not fix are signalled
/// through the contents of `dirs.error`, not through the result.
pub trait ToolRunner {
    /// Run the EXIF-repair tool over `dirs.input`, writing to `dirs.output` / `dirs.error`.
    fn run_repair(&mut self, dirs: &FixDirs) -> Result<()>;

    /// Strip and reimport metadata in place for every file in `error_dir`.
    fn run_edit(&mut self, error_dir: &Path) -> Result<()>;
}
