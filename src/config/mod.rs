//! Configuration: types, default paths, XML loading and validation.
//! Without a config file the built-in defaults below are used unchanged.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TAKEOUT_FIX_CONFIG";

pub const REPAIR_PROGRAM_DEFAULT: &str = "yarn";
pub const REPAIR_ARGS_DEFAULT: &[&str] = &["start"];
pub const EDIT_PROGRAM_DEFAULT: &str = "exiftool";
