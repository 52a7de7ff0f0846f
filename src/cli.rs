//! CLI definition and parsing.
//!
//! Notes:
//! - TAKEOUT_DIR is required unless --print-config or --init-config is given.
//! - --debug is a shorthand for --log-level debug.
//! - --repair-program replaces the whole repair command; pair it with --repair-arg.

use clap::{ArgAction, Parser, ValueHint};
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel};

/// Restructure a photo archive export and repair its EXIF metadata.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Restructure a photo archive export and repair lost EXIF metadata"
)]
pub struct Args {
    /// Path to the top-level export folder (the one containing the "Google ..." directory).
    #[arg(
        value_name = "TAKEOUT_DIR",
        value_hint = ValueHint::DirPath,
        required_unless_present_any = ["print_config", "init_config"]
    )]
    pub takeout_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_parser = clap::value_parser!(LogLevel), help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Dry-run: log actions but do not modify the filesystem or run tools.
    #[arg(long, help = "Show what would be done without moving folders or running tools")]
    pub dry_run: bool,

    /// Program to run as the EXIF-repair tool.
    #[arg(long, value_name = "PROGRAM")]
    pub repair_program: Option<String>,

    /// Leading argument for --repair-program (repeatable).
    #[arg(long, value_name = "ARG", action = ArgAction::Append, allow_hyphen_values = true)]
    pub repair_arg: Vec<String>,

    /// Directory the repair tool is started from.
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub repair_workdir: Option<PathBuf>,

    /// Program to run as the metadata-edit tool.
    #[arg(long, value_name = "PROGRAM")]
    pub edit_program: Option<String>,

    /// Print the config file location in use, then exit.
    #[arg(long, help = "Print the config file location used by takeout_fix and exit")]
    pub print_config: bool,

    /// Write a template config file (if none exists), then exit.
    #[arg(long, help = "Write a template config file at the config location and exit")]
    pub init_config: bool,
}

impl Args {
    /// Export folder with surrounding quotes and one trailing separator removed.
    pub fn resolved_takeout_dir(&self) -> Option<PathBuf> {
        self.takeout_dir.as_deref().map(sanitize_path)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(program) = &self.repair_program {
            cfg.set_repair_command(program.clone(), self.repair_arg.clone());
        } else if !self.repair_arg.is_empty() {
            cfg.repair_args = self.repair_arg.clone();
        }
        if let Some(dir) = &self.repair_workdir {
            cfg.repair_workdir = Some(dir.clone());
        }
        if let Some(program) = &self.edit_program {
            cfg.edit_program = program.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

fn sanitize_path(p: &Path) -> PathBuf {
    // Shells on Windows can leave quotes (and a trailing backslash inside them) in the argument.
    let raw = p.to_string_lossy();
    let trimmed = raw.trim();
    let mut inner = if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    };

    if (inner.ends_with('/') || inner.ends_with('\\')) && inner.len() > 1 {
        inner.pop();
    }
    PathBuf::from(inner)
}

pub fn parse() -> Args {
    Args::parse()
}
