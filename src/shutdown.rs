//! Process-wide shutdown coordination.
//! Provides a flag set by the Ctrl-C handler so the pipeline can stop between steps.
//!
//! Notes:
//! - Relaxed atomics are sufficient for a one-way "stop" flag.
//! - `request()` is safe to call from signal handlers.
//! - A running external tool is not killed; the flag is only checked between moves and albums.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::TakeoutFixError;

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Check whether a shutdown has been requested.
#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Bail out with `Interrupted` if a shutdown has been requested.
pub fn check() -> anyhow::Result<()> {
    if is_requested() {
        return Err(TakeoutFixError::Interrupted.into());
    }
    Ok(())
}
