//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler,
//! validates settings and runs the pipeline.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use takeout_fix::cli::Args;
use takeout_fix::config::{create_template_config, default_config_path, load_config, CONFIG_ENV};
use takeout_fix::output as out;
use takeout_fix::{run_pipeline, shutdown, FixOutcome, RestructureOutcome, RunSummary, SystemRunner, TakeoutFixError};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Config-file commands run before logging init.
    if args.print_config {
        print_config_location();
        return Ok(());
    }
    if args.init_config {
        let path = default_config_path()?;
        if path.exists() {
            out::print_info(&format!("A config file already exists at: {}", path.display()));
            return Ok(());
        }
        create_template_config(&path)?;
        out::print_success(&format!("A template takeout_fix config was written to: {}", path.display()));
        return Ok(());
    }

    // XML (if present) < CLI flags.
    let (mut cfg, cfg_path) = load_config().inspect_err(|e| {
        out::print_error(&format!("Failed to load config: {e:#}"));
    })?;
    args.apply_overrides(&mut cfg);

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).inspect_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
    })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping after the current step...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })?;
    }

    debug!(?args, config_file = ?cfg_path, "Starting takeout_fix");

    let result = (|| -> Result<RunSummary> {
        cfg.validate()?;
        let input = args
            .resolved_takeout_dir()
            .ok_or_else(|| anyhow::anyhow!("TAKEOUT_DIR is required"))?;
        // Absolute so the repair tool may run from its own working directory.
        let input = std::path::absolute(&input)?;
        let dry_run = cfg.dry_run;
        let mut runner = SystemRunner::new(cfg.clone());
        run_pipeline(&input, &mut runner, dry_run)
    })();

    match &result {
        Ok(summary) => report_summary(summary, cfg.dry_run),
        Err(e) => log_failure(e),
    }

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result.map(|_| ())
}

fn print_config_location() {
    if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default takeout_fix config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there; built-in defaults are used. Run with --init-config to create a template.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
}

fn log_failure(e: &anyhow::Error) {
    match e.downcast_ref::<TakeoutFixError>() {
        Some(tf) => {
            let code = tf.code();
            let kind = tf.kind();
            match tf {
                TakeoutFixError::RootNotFound { input, prefix } => {
                    error!(code, kind, input = %input.display(), %prefix, "Export root not found")
                }
                TakeoutFixError::ToolFailed { tool, program, status } => {
                    error!(code, kind, %tool, %program, %status, "External tool failed; aborting remaining work")
                }
                TakeoutFixError::ToolUnavailable { tool, program, reason } => {
                    error!(code, kind, %tool, %program, %reason, "External tool could not be started")
                }
                TakeoutFixError::MoveFailed { src, dest, reason } => {
                    error!(code, kind, src = %src.display(), dest = %dest.display(), %reason, "Restructuring stopped")
                }
                TakeoutFixError::InvalidConfig(msg) => error!(code, kind, %msg, "Invalid configuration"),
                TakeoutFixError::Interrupted => error!(code, kind, "Aborted by user"),
            }
        }
        None => error!(error = ?e, "Run failed"),
    }
}

fn describe_restructure(outcome: RestructureOutcome) -> String {
    match outcome {
        RestructureOutcome::AlreadyDone => "already in place".to_string(),
        RestructureOutcome::Moved(n) => format!("{n} folder(s) moved"),
    }
}

fn report_summary(summary: &RunSummary, dry_run: bool) {
    let retried = summary
        .albums
        .iter()
        .filter(|a| a.outcome == FixOutcome::Retried)
        .count()
        + usize::from(summary.photos == FixOutcome::Retried);
    info!(
        root = %summary.root.display(),
        photos_group = %describe_restructure(summary.restructure.photos),
        albums_group = %describe_restructure(summary.restructure.albums),
        albums = summary.albums.len(),
        retried,
        "Run complete"
    );
    let prefix = if dry_run { "Dry-run: " } else { "" };
    out::print_success(&format!(
        "{prefix}processed {} album(s) and the Photos group under {} ({} needed the edit-tool retry)",
        summary.albums.len(),
        summary.root.display(),
        retried
    ));
}
