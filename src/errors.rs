//! Typed error definitions for takeout_fix.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Which external collaborator a tool error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Restores EXIF data from the archive's JSON sidecars.
    Repair,
    /// Strips and reimports tags on files the repair tool rejected.
    Edit,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tool::Repair => f.write_str("repair tool"),
            Tool::Edit => f.write_str("edit tool"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TakeoutFixError {
    #[error("No directory starting with '{prefix}' found under {input}")]
    RootNotFound { input: PathBuf, prefix: String },

    #[error("The {tool} ('{program}') exited unsuccessfully: {status}")]
    ToolFailed {
        tool: Tool,
        program: String,
        status: ExitStatus,
    },

    #[error("The {tool} ('{program}') could not be started: {reason}")]
    ToolUnavailable {
        tool: Tool,
        program: String,
        reason: String,
    },

    #[error("Failed to move {src} -> {dest}: {reason}")]
    MoveFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl TakeoutFixError {
    /// Stable process exit code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            TakeoutFixError::RootNotFound { .. } => 2,
            TakeoutFixError::ToolFailed { .. } => 3,
            TakeoutFixError::ToolUnavailable { .. } => 4,
            TakeoutFixError::MoveFailed { .. } => 5,
            TakeoutFixError::InvalidConfig(_) => 6,
            TakeoutFixError::Interrupted => 130,
        }
    }

    /// Short machine-friendly name used as the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TakeoutFixError::RootNotFound { .. } => "root_not_found",
            TakeoutFixError::ToolFailed { .. } => "tool_failed",
            TakeoutFixError::ToolUnavailable { .. } => "tool_unavailable",
            TakeoutFixError::MoveFailed { .. } => "move_failed",
            TakeoutFixError::InvalidConfig(_) => "invalid_config",
            TakeoutFixError::Interrupted => "interrupted",
        }
    }
}
