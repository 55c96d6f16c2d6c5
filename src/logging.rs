//! Logging setup.
//!
//! chklist draws directly on the terminal, so log output can never go to
//! stdout or stderr while the checklist is up. Logging stays off unless
//! `CHKLIST_LOG` is set; its value is an `EnvFilter` directive (`debug`,
//! `chklist=trace`, ...). Records are appended to `CHKLIST_LOG_FILE`, or to
//! `chklist.log` in the platform cache directory.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CHKLIST_LOG";
const LOG_FILE_ENV: &str = "CHKLIST_LOG_FILE";
const LOG_FILE_NAME: &str = "chklist.log";

/// Resolve an override path from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn path_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Where log records are written when logging is enabled.
pub fn log_file_path() -> Result<PathBuf> {
    if let Some(path) = path_from_env(LOG_FILE_ENV) {
        return Ok(path);
    }

    let dirs = ProjectDirs::from("", "", "chklist")
        .ok_or_else(|| anyhow!("unable to determine a cache directory for chklist"))?;
    Ok(dirs.cache_dir().join(LOG_FILE_NAME))
}

/// Install the global subscriber if `CHKLIST_LOG` asks for it.
///
/// Returns the log file path when logging was enabled.
pub fn initialize() -> Result<Option<PathBuf>> {
    let Some(directive) = env::var(LOG_ENV).ok().filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };

    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid {} filter: {}", LOG_ENV, directive))?;

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(Some(path))
}
