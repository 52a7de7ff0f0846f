use anyhow::{bail, Result};
use std::fs;
use std::path::{Path, PathBuf};
use takeout_fix::{fix_metadata, FixDirs, FixOutcome, TakeoutFixError, ToolRunner};
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Repair(PathBuf),
    Edit(PathBuf),
}

/// Every repair pass leaves a file in the error directory; the edit tool fixes nothing.
#[derive(Default)]
struct StubbornRepair {
    calls: Vec<Call>,
}

impl ToolRunner for StubbornRepair {
    fn run_repair(&mut self, dirs: &FixDirs) -> Result<()> {
        self.calls.push(Call::Repair(dirs.input.clone()));
        fs::write(dirs.error.join(format!("unfixable-{}.jpg", self.calls.len())), b"x")?;
        Ok(())
    }

    fn run_edit(&mut self, error_dir: &Path) -> Result<()> {
        self.calls.push(Call::Edit(error_dir.to_path_buf()));
        Ok(())
    }
}

/// Never leaves anything behind.
#[derive(Default)]
struct CleanRepair {
    calls: Vec<Call>,
}

impl ToolRunner for CleanRepair {
    fn run_repair(&mut self, dirs: &FixDirs) -> Result<()> {
        self.calls.push(Call::Repair(dirs.input.clone()));
        Ok(())
    }

    fn run_edit(&mut self, error_dir: &Path) -> Result<()> {
        self.calls.push(Call::Edit(error_dir.to_path_buf()));
        Ok(())
    }
}

struct FailingEdit;

impl ToolRunner for FailingEdit {
    fn run_repair(&mut self, dirs: &FixDirs) -> Result<()> {
        fs::write(dirs.error.join("bad.jpg"), b"x")?;
        Ok(())
    }

    fn run_edit(&mut self, _error_dir: &Path) -> Result<()> {
        bail!(TakeoutFixError::Interrupted)
    }
}

fn dirs_in(base: &Path) -> FixDirs {
    FixDirs {
        input: base.join("Albums/Trip"),
        output: base.join("AlbumsProcessed/Trip"),
        error: base.join("AlbumsError/Trip"),
    }
}

#[test]
fn retry_is_bounded_even_if_error_dir_stays_non_empty() {
    let td = tempdir().unwrap();
    let dirs = dirs_in(td.path());
    let mut runner = StubbornRepair::default();

    let outcome = fix_metadata(&mut runner, &dirs, true, false).unwrap();

    assert_eq!(outcome, FixOutcome::Retried);
    assert_eq!(
        runner.calls,
        vec![
            Call::Repair(dirs.input.clone()),
            Call::Edit(dirs.error.clone()),
            Call::Repair(dirs.input.clone()),
        ]
    );
    // Still non-empty after the second pass; nothing re-checks it.
    assert_eq!(fs::read_dir(&dirs.error).unwrap().count(), 2);
}

#[test]
fn empty_error_dir_never_invokes_edit_tool() {
    let td = tempdir().unwrap();
    let dirs = dirs_in(td.path());
    let mut runner = CleanRepair::default();

    let outcome = fix_metadata(&mut runner, &dirs, true, false).unwrap();

    assert_eq!(outcome, FixOutcome::Clean);
    assert_eq!(runner.calls, vec![Call::Repair(dirs.input.clone())]);
}

#[test]
fn pre_existing_error_files_trigger_the_retry() {
    // Left over from an earlier run: the error dir is inspected as-is after the first pass.
    let td = tempdir().unwrap();
    let dirs = dirs_in(td.path());
    fs::create_dir_all(&dirs.error).unwrap();
    fs::write(dirs.error.join("old.jpg"), b"x").unwrap();
    let mut runner = CleanRepair::default();

    let outcome = fix_metadata(&mut runner, &dirs, true, false).unwrap();
    assert_eq!(outcome, FixOutcome::Retried);
    assert_eq!(runner.calls.len(), 3);
}

#[test]
fn edit_tool_failure_stops_before_second_pass() {
    let td = tempdir().unwrap();
    let dirs = dirs_in(td.path());
    let err = fix_metadata(&mut FailingEdit, &dirs, true, false).unwrap_err();
    assert!(err.downcast_ref::<TakeoutFixError>().is_some());
}
