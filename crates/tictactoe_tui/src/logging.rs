//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Logs to a file, keeping the terminal free for the game screen.
pub fn init_file_logging(path: &Path, fallback_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Logs to stderr, leaving stdout for program output.
pub fn init_stderr_logging(fallback_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(std::io::stderr)
        .try_init();
}
