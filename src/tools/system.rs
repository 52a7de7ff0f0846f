//! Runner that spawns the configured programs.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use super::command::{edit_command, repair_command, CommandSpec};
use super::ToolRunner;
use crate::config::Config;
use crate::errors::{TakeoutFixError, Tool};
use crate::layout::FixDirs;
use crate::shutdown;

/// Spawns the repair/edit programs from a [`Config`] and waits for them.
/// Under `dry_run` the command lines are logged and nothing is spawned.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    config: Config,
}

impl SystemRunner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn run(&self, tool: Tool, spec: &CommandSpec) -> Result<()> {
        if self.config.dry_run {
            info!(%tool, command = %spec, "dry-run: would run");
            return Ok(());
        }

        debug!(%tool, command = %spec, workdir = ?spec.workdir, "spawning");
        let status = spec
            .to_command()
            .status()
            .map_err(|e| TakeoutFixError::ToolUnavailable {
                tool,
                program: spec.program.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            // The child shares the terminal, so a Ctrl-C reaches it as well.
            if shutdown::is_requested() {
                info!(%tool, %status, "tool stopped by interrupt");
                return Err(TakeoutFixError::Interrupted.into());
            }
            return Err(TakeoutFixError::ToolFailed {
                tool,
                program: spec.program.clone(),
                status,
            }
            .into());
        }
        debug!(%tool, "finished successfully");
        Ok(())
    }
}

impl ToolRunner for SystemRunner {
    fn run_repair(&mut self, dirs: &FixDirs) -> Result<()> {
        let spec = repair_command(&self.config, dirs);
        self.run(Tool::Repair, &spec)
    }

    fn run_edit(&mut self, error_dir: &Path) -> Result<()> {
        let spec = edit_command(&self.config, error_dir);
        self.run(Tool::Edit, &spec)
    }
}
