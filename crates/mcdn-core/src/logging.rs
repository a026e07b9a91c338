//! Logging setup: append to a file under the XDG state dir, or write to stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,mcdn=info,mcdn_core=info";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to `~/.local/state/mcdn/mcdn.log`.
    StateFile,
    /// Append to the given file.
    File(PathBuf),
    Stderr,
}

/// Default log file location.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mcdn")?;
    Ok(xdg_dirs.get_state_home().join("mcdn.log"))
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info,mcdn=debug,mcdn_core=trace");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_append(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create log dir {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

/// Installs the global subscriber. A second call is a no-op.
///
/// Returns `Err` when the log file cannot be opened so the caller can retry
/// with [`LogTarget::Stderr`].
pub fn init_logging(target: LogTarget, verbose: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_ansi(false);

    let installed = match &target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::StateFile | LogTarget::File(_) => {
            let path = match &target {
                LogTarget::File(p) => p.clone(),
                _ => log_file_path()?,
            };
            let file = open_append(&path)?;
            let installed = builder.with_writer(Arc::new(file)).try_init();
            if installed.is_ok() {
                tracing::debug!("mcdn logging initialized at {}", path.display());
            }
            installed
        }
    };

    if installed.is_err() {
        tracing::trace!("global subscriber already set; keeping it");
    }
    Ok(())
}

/// Stderr logging; used when the file target fails.
pub fn init_logging_stderr(verbose: bool) {
    // Stderr cannot fail to open.
    let _ = init_logging(LogTarget::Stderr, verbose);
}
