use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use std::path::{Path, PathBuf};
use takeout_fix::platform::open_log_file_secure_append;
use takeout_fix::{process_albums, ExportLayout, FixDirs, ToolRunner};
use tempfile::tempdir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

/// Appends written bytes into a shared Vec<u8>.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct NoTools;

impl ToolRunner for NoTools {
    fn run_repair(&mut self, _dirs: &FixDirs) -> Result<()> {
        panic!("no album should be repaired");
    }

    fn run_edit(&mut self, _error_dir: &Path) -> Result<()> {
        panic!("no album should be edited");
    }
}

fn capture<F: FnOnce()>(level: &str, f: F) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };
    let layer = tsfmt::layer()
        .with_writer(make_writer)
        .with_target(false)
        .with_ansi(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new(level)).with(layer);
    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, f);
    let guard = buf.lock().unwrap();
    String::from_utf8_lossy(&guard[..]).to_string()
}

#[test]
fn empty_albums_group_logs_a_warning() {
    let td = tempdir().unwrap();
    let layout = ExportLayout::new(td.path());

    let logs = capture("info", || {
        let results = process_albums(&layout, &mut NoTools, false).unwrap();
        assert!(results.is_empty());
    });

    assert!(logs.contains("WARN"), "expected a warning; logs={logs}");
    assert!(logs.contains("No albums found"), "logs={logs}");
}

#[test]
fn quiet_filter_drops_the_warning() {
    let td = tempdir().unwrap();
    let layout = ExportLayout::new(td.path());

    let logs = capture("error", || {
        process_albums(&layout, &mut NoTools, false).unwrap();
    });

    assert!(logs.is_empty(), "logs={logs}");
}

#[test]
fn file_logging_appends_to_custom_path() {
    let td = tempdir().unwrap();
    let base = std::fs::canonicalize(td.path()).unwrap();
    let log_path: PathBuf = base.join("takeout_fix_test.log");

    let file = open_log_file_secure_append(&log_path).expect("open_log_file_secure_append");
    let (writer, guard): (tracing_appender::non_blocking::NonBlocking, WorkerGuard) =
        tracing_appender::non_blocking(file);
    let file_layer = tsfmt::layer()
        .with_writer(move || writer.clone())
        .with_target(false)
        .with_ansi(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new("info")).with(file_layer);
    let dispatch = tracing::Dispatch::new(subscriber);

    tracing::dispatcher::with_default(&dispatch, || {
        tracing::info!("file-logging-test: written");
    });
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).expect("read log file");
    assert!(contents.contains("file-logging-test"), "contents={contents}");
}
