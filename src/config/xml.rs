//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request.
//!
//! Layout:
//! <config>
//!   <repair_program>yarn</repair_program>
//!   <repair_arg>start</repair_arg>
//!   <repair_workdir>/path/to/repair-tool</repair_workdir>
//!   <edit_program>exiftool</edit_program>
//!   <log_level>normal</log_level>
//!   <log_file>/path/to/takeout_fix.log</log_file>
//! </config>
//!
//! Unknown fields are rejected so typos surface as errors instead of silent defaults.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::{EDIT_PROGRAM_DEFAULT, REPAIR_PROGRAM_DEFAULT};
use crate::errors::TakeoutFixError;
use crate::platform::write_new_file_secure;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    repair_program: Option<String>,
    #[serde(rename = "repair_arg", default)]
    repair_args: Vec<String>,
    repair_workdir: Option<String>,
    edit_program: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

/// Map XmlConfig onto the defaults.
///
/// A `repair_program` entry brings its own (possibly empty) `repair_arg` list;
/// `repair_arg` entries alone only replace the default arguments.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    let args: Vec<String> = parsed.repair_args.iter().map(|a| a.trim().to_string()).collect();
    match non_empty(parsed.repair_program.as_deref()) {
        Some(program) => cfg.set_repair_command(program, args),
        None if !args.is_empty() => cfg.repair_args = args,
        None => {}
    }

    if let Some(dir) = non_empty(parsed.repair_workdir.as_deref()) {
        cfg.repair_workdir = Some(PathBuf::from(dir));
    }
    if let Some(program) = non_empty(parsed.edit_program.as_deref()) {
        cfg.edit_program = program.to_string();
    }
    if let Some(lvl) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = lvl
            .parse::<LogLevel>()
            .map_err(TakeoutFixError::InvalidConfig)?;
    }
    if let Some(lf) = non_empty(parsed.log_file.as_deref()) {
        cfg.log_file = Some(PathBuf::from(lf));
    }
    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents).map_err(|e| {
        TakeoutFixError::InvalidConfig(format!("{}: {}", path.display(), e))
    })?;
    xml_to_config(parsed).with_context(|| format!("config xml '{}'", path.display()))
}

/// Load the effective config: the XML file at `default_config_path()` if it exists,
/// otherwise built-in defaults. Returns the path consulted alongside the config.
pub fn load_config() -> Result<(Config, Option<PathBuf>)> {
    let path = default_config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok((Config::default(), None));
    }
    let cfg = load_config_from_xml_path(&path)?;
    Ok((cfg, Some(path)))
}

/// Write a commented template config at `path`.
/// Refuses to overwrite an existing file or to write below a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        return Err(anyhow::anyhow!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        ));
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/takeout_fix.log".into());

    let content = format!(
        "<!--\n  takeout_fix configuration (XML)\n\n    repair_program  -> program run as the EXIF-repair tool\n    repair_arg      -> leading argument for it (repeat the element for more);\n                       the input, output and error directory flags follow them\n    repair_workdir  -> directory the repair tool is started from (optional)\n    edit_program    -> metadata-edit tool run on the error directory\n    log_level       -> quiet | normal | info | debug\n    log_file        -> path to a log file (optional; stderr is always used)\n\n  CLI flags override XML values.\n-->\n<config>\n  <repair_program>{}</repair_program>\n  <repair_arg>start</repair_arg>\n  <edit_program>{}</edit_program>\n  <log_level>normal</log_level>\n  <!-- <log_file>{}</log_file> -->\n</config>\n",
        REPAIR_PROGRAM_DEFAULT, EDIT_PROGRAM_DEFAULT, suggested_log
    );

    write_new_file_secure(path, content.as_bytes())?;
    info!("Created template config at {}", path.display());
    Ok(())
}
