//! Tracing initialization.
//! Builds a subscriber with EnvFilter, supports compact or JSON formats, and optional file logging.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - Console logs go to stderr; stdout is left to the external tools.
//! - If `log_file` is provided and passes safety checks, a non-blocking file layer is added.

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use std::path::Path;
use takeout_fix::config::path_has_symlink_ancestor;
use takeout_fix::output as out;
use takeout_fix::platform::open_log_file_secure_append;
use takeout_fix::LogLevel;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{registry, Registry};

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> stdfmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

#[inline]
fn env_filter_from_level(level_filter: LevelFilter) -> EnvFilter {
    EnvFilter::new(level_filter.to_string().to_ascii_lowercase())
}

/// Try to open a non-blocking file writer for logging.
/// Refuses paths with a symlinked ancestor; failures are reported and file logging is skipped.
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing to enable file logging: ancestor of {} is a symlink",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!("Error checking log path {} for symlinks: {}", path.display(), e));
            return None;
        }
        Ok(false) => {}
    }

    match open_log_file_secure_append(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!("Failed to open log file {}: {}", path.display(), e));
            None
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn console_layer(json: bool) -> BoxedLayer {
    if json {
        tsfmt::layer()
            .json()
            .with_timer(LocalHumanTime)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tsfmt::layer()
            .compact()
            .with_timer(LocalHumanTime)
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    }
}

fn file_layer(writer: NonBlocking, json: bool) -> BoxedLayer {
    if json {
        tsfmt::layer().json().with_timer(LocalHumanTime).with_writer(writer).boxed()
    } else {
        tsfmt::layer()
            .compact()
            .with_timer(LocalHumanTime)
            .with_ansi(false)
            .with_writer(writer)
            .boxed()
    }
}

/// Initialize the global subscriber. Returns the file appender's WorkerGuard, if any;
/// hold it until shutdown so buffered lines are flushed.
pub fn init_tracing(lvl: &LogLevel, log_file: Option<&Path>, json: bool) -> Result<Option<WorkerGuard>> {
    let mut layers = vec![console_layer(json)];
    let mut guard = None;
    if let Some((writer, g)) = log_file.and_then(maybe_open_non_blocking_writer) {
        layers.push(file_layer(writer, json));
        guard = Some(g);
    }

    registry()
        .with(layers)
        .with(env_filter_from_level(to_level_filter(lvl)))
        .try_init()?;
    Ok(guard)
}
