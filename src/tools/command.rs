//! Command lines for the two external tools.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::layout::FixDirs;

/// Flags that make the edit tool clear every tag and copy them back from the
/// file itself, writing unsafe tags too and treating the ICC profile specially.
pub const EDIT_ARGS: [&str; 6] = ["-all=", "-tagsfromfile", "@", "-all:all", "-unsafe", "-icc_profile"];

/// A fully resolved program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<OsString>,
    pub workdir: Option<PathBuf>,
}

impl CommandSpec {
    /// Build a `std::process::Command` that inherits stdio.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            let a = arg.to_string_lossy();
            if a.is_empty() || a.contains(char::is_whitespace) {
                write!(f, " '{}'", a)?;
            } else {
                write!(f, " {}", a)?;
            }
        }
        Ok(())
    }
}

fn flag_with_path(flag: &str, path: &Path) -> OsString {
    let mut s = OsString::from(flag);
    s.push(path.as_os_str());
    s
}

/// `<repair_program> <repair_args..> --inputDir=<in> --outputDir=<out> --errorDir=<err>`
pub fn repair_command(cfg: &Config, dirs: &FixDirs) -> CommandSpec {
    let mut args: Vec<OsString> = cfg.repair_args.iter().map(OsString::from).collect();
    args.push(flag_with_path("--inputDir=", &dirs.input));
    args.push(flag_with_path("--outputDir=", &dirs.output));
    args.push(flag_with_path("--errorDir=", &dirs.error));
    CommandSpec {
        program: cfg.repair_program.clone(),
        args,
        workdir: cfg.repair_workdir.clone(),
    }
}

/// `<edit_program> -all= -tagsfromfile @ -all:all -unsafe -icc_profile <error_dir>`
pub fn edit_command(cfg: &Config, error_dir: &Path) -> CommandSpec {
    let mut args: Vec<OsString> = EDIT_ARGS.iter().map(OsString::from).collect();
    args.push(error_dir.as_os_str().to_owned());
    CommandSpec {
        program: cfg.edit_program.clone(),
        args,
        workdir: None,
    }
}
