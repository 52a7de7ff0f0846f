//! Config validation logic.
//! Checks tool programs are named and the repair working directory exists.
//! Whether the programs are actually installed is only discovered when they are spawned.

use anyhow::Result;
use tracing::{debug, error};

use super::types::Config;
use crate::errors::TakeoutFixError;

impl Config {
    /// Validate the tool settings before any filesystem changes are made.
    pub fn validate(&self) -> Result<()> {
        if self.repair_program.trim().is_empty() {
            error!("repair_program is empty");
            return Err(TakeoutFixError::InvalidConfig("repair_program must not be empty".into()).into());
        }
        if self.edit_program.trim().is_empty() {
            error!("edit_program is empty");
            return Err(TakeoutFixError::InvalidConfig("edit_program must not be empty".into()).into());
        }
        if let Some(dir) = &self.repair_workdir
            && !dir.is_dir()
        {
            error!("repair_workdir is not a directory: {}", dir.display());
            return Err(TakeoutFixError::InvalidConfig(format!(
                "repair_workdir is not an existing directory: {}",
                dir.display()
            ))
            .into());
        }

        debug!(
            repair = %self.repair_program,
            edit = %self.edit_program,
            workdir = ?self.repair_workdir,
            "Config validated"
        );
        Ok(())
    }
}
