//! Tracing setup for the CLI.
//!
//! Events go to `$XDG_STATE_HOME/phishfeat/phishfeat.log` when that file can
//! be opened; the binary falls back to [`init_logging_stderr`] otherwise.
//! `RUST_LOG` overrides the default filter in both cases.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,phishfeat=debug";
const LOG_FILE: &str = "phishfeat.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Directory holding the log file.
pub fn log_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishfeat")?;
    Ok(xdg_dirs.get_state_home().join("phishfeat"))
}

/// Creates `dir` if needed and opens the log file in it for appending.
fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((path, file))
}

/// Installs a global subscriber writing plain (non-ANSI) lines to the log file.
///
/// Errors when the state dir is unusable or a subscriber is already set, so
/// the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let (path, file) = open_log_file(&log_dir()?)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!(log = %path.display(), "logging to file");
    Ok(())
}

/// Installs a stderr subscriber. A no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
