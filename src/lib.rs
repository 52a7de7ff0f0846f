//! Core library for `takeout_fix`.
//!
//! Restructures an exported photo archive into `Photos/` and `Albums/` groups,
//! then drives an external EXIF-repair tool (and, for files it rejects, a
//! metadata-edit tool) over every album and over the Photos group.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fixer;
pub mod fs_ops;
pub mod layout;
pub mod output;
pub mod platform;
pub mod process;
pub mod resolve;
pub mod restructure;
pub mod shutdown;
pub mod tools;

pub use config::{default_config_path, load_config, Config, LogLevel};
pub use errors::{TakeoutFixError, Tool};
pub use fixer::{fix_metadata, FixOutcome};
pub use layout::{ExportLayout, FixDirs};
pub use process::{
    process_albums, process_albums_with_plan, process_photos, run_pipeline, AlbumResult, RunSummary,
};
pub use resolve::resolve_export_root;
pub use restructure::{restructure, restructure_if_needed, RestructureOutcome, RestructureReport};
pub use tools::{SystemRunner, ToolRunner};
