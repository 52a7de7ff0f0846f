//! Metadata fix routine.
//!
//! One invocation walks a fixed state machine:
//!
//! ```text
//! Repair -> Inspect --empty--> Done(Clean)
//!              |
//!          non-empty -> Edit -> Repair(again) -> Done(Retried)
//! ```
//!
//! The repair tool runs at most twice and the edit tool at most once. After the
//! second repair pass the error directory is not inspected again.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::fs_ops::{ensure_dir, has_visible_entries};
use crate::layout::FixDirs;
use crate::tools::ToolRunner;

/// How a fix invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// One repair pass; the error directory was not inspected.
    Unchecked,
    /// One repair pass left the error directory empty.
    Clean,
    /// The error directory was non-empty: edit tool ran, then a second repair pass.
    Retried,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FixState {
    Repair { second_pass: bool },
    Inspect,
    Edit,
    Done(FixOutcome),
}

/// Run the repair tool over `dirs`, remediating once through the edit tool when
/// the repair tool left files in the error directory.
///
/// `check_error_dir = false` limits the run to a single repair pass.
/// Any tool failure aborts immediately.
pub fn fix_metadata<R: ToolRunner + ?Sized>(
    runner: &mut R,
    dirs: &FixDirs,
    check_error_dir: bool,
    dry_run: bool,
) -> Result<FixOutcome> {
    ensure_dir(&dirs.input, dry_run)?;
    ensure_dir(&dirs.output, dry_run)?;
    ensure_dir(&dirs.error, dry_run)?;

    let mut state = FixState::Repair { second_pass: false };
    loop {
        state = match state {
            FixState::Repair { second_pass } => {
                runner.run_repair(dirs)?;
                if second_pass {
                    FixState::Done(FixOutcome::Retried)
                } else if check_error_dir {
                    FixState::Inspect
                } else {
                    FixState::Done(FixOutcome::Unchecked)
                }
            }
            FixState::Inspect => {
                if has_visible_entries(&dirs.error)? {
                    warn!(error_dir = %dirs.error.display(), "Repair tool left files in the error directory");
                    FixState::Edit
                } else {
                    FixState::Done(FixOutcome::Clean)
                }
            }
            FixState::Edit => {
                info!(error_dir = %dirs.error.display(), "Re-importing tags with the edit tool, then repairing again");
                runner.run_edit(&dirs.error)?;
                FixState::Repair { second_pass: true }
            }
            FixState::Done(outcome) => {
                debug!(input = %dirs.input.display(), ?outcome, "metadata fix finished");
                return Ok(outcome);
            }
        };
    }
}
