//! Tracing subscriber setup
//!
//! `RUST_LOG` controls the filter (default `info`). CLI commands log to
//! stderr; the TUI owns the terminal, so it logs to a file instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{ProfitFirstError, ProfitFirstResult};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr
pub fn init_stderr() {
    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

/// Log to a file, appending
pub fn init_file(path: &Path) -> ProfitFirstResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ProfitFirstError::Io(format!("Failed to open log file {}: {}", path.display(), e))
        })?;

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();
    Ok(())
}
