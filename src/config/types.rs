//! Settings for one run: which tools to launch and how loudly to log.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{EDIT_PROGRAM_DEFAULT, REPAIR_ARGS_DEFAULT, REPAIR_PROGRAM_DEFAULT};

/// Verbosity accepted by `--log-level` and `<log_level>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only.
    Quiet,
    /// Progress per album plus warnings.
    #[default]
    Normal,
    /// Adds spawned command lines and per-directory details.
    Info,
    /// Everything, down to trace events.
    Debug,
}

impl LogLevel {
    /// Case-insensitive; a few aliases map onto the four levels.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "info" | "verbose" | "detailed" => Some(Self::Info),
            "debug" | "trace" => Some(Self::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Info => "info",
            Self::Debug => "debug",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program launched as the EXIF-repair tool
    pub repair_program: String,
    /// Leading arguments passed before the directory flags
    pub repair_args: Vec<String>,
    /// Directory the repair tool is launched from (None = inherit)
    pub repair_workdir: Option<PathBuf>,
    /// Program launched as the metadata-edit tool
    pub edit_program: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, log actions but do not modify the filesystem or spawn tools
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repair_program: REPAIR_PROGRAM_DEFAULT.to_string(),
            repair_args: REPAIR_ARGS_DEFAULT.iter().map(|s| s.to_string()).collect(),
            repair_workdir: None,
            edit_program: EDIT_PROGRAM_DEFAULT.to_string(),
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
        }
    }
}

impl Config {
    /// Replace the repair command. The new argument list fully replaces the old one.
    pub fn set_repair_command(&mut self, program: impl Into<String>, args: Vec<String>) {
        self.repair_program = program.into();
        self.repair_args = args;
    }
}
