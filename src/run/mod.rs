//! Startup plumbing for chklist.
//!
//! Resolves and validates the list file, loads it, and hands over to the
//! interactive loop in [`tui`].

mod tui;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_LIST_NAME};
use crate::core::list::ListStore;
use crate::error::{ChklistError, Result};

pub use tui::{read_byte, run_loop, run_loop_with, run_terminal_mode};

/// Resolve the list path: an explicit path wins, else `$HOME/.todo`.
pub fn resolve_list_path(config: &Config) -> Result<PathBuf> {
    resolve_list_path_with(config, || {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    })
}

/// Internal path resolution with injectable home directory lookup.
pub fn resolve_list_path_with<F>(config: &Config, home_dir: F) -> Result<PathBuf>
where
    F: FnOnce() -> Option<PathBuf>,
{
    if let Some(path) = &config.list_path {
        return Ok(path.clone());
    }

    home_dir()
        .map(|home| home.join(DEFAULT_LIST_NAME))
        .ok_or(ChklistError::HomeDirUnavailable)
}

/// Validate and canonicalize the list path, refusing anything that is not
/// a regular file (directories, devices, FIFOs, sockets).
pub fn validate_file_path(path: &Path) -> Result<PathBuf> {
    let canonical = path.canonicalize().map_err(|source| ChklistError::ListOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let metadata = std::fs::metadata(&canonical).map_err(|source| ChklistError::ListOpen {
        path: canonical.clone(),
        source,
    })?;
    let ft = metadata.file_type();

    let reject = |reason| ChklistError::ListPath {
        path: canonical.clone(),
        reason,
    };

    if ft.is_dir() {
        return Err(reject("is a directory"));
    }

    // Block special file types that could hang the loader
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if ft.is_char_device() {
            return Err(reject("is a character device"));
        }
        if ft.is_block_device() {
            return Err(reject("is a block device"));
        }
        if ft.is_fifo() {
            return Err(reject("is a FIFO"));
        }
        if ft.is_socket() {
            return Err(reject("is a socket"));
        }
    }

    Ok(canonical)
}

/// Resolve, validate and read the checklist named by `config`.
pub fn load_list(config: &Config) -> Result<ListStore> {
    let path = validate_file_path(&resolve_list_path(config)?)?;
    let file = File::open(&path).map_err(|source| ChklistError::ListOpen {
        path: path.clone(),
        source,
    })?;

    let list = ListStore::from_reader(BufReader::new(file), config.capacity)
        .map_err(ChklistError::ListRead)?;
    tracing::info!(path = %path.display(), items = list.len(), "checklist read");
    Ok(list)
}
