//! Error types for chklist.
//!
//! Every variant here is a startup failure: once the interactive loop is
//! running, the only way out is a terminal write error, which surfaces as
//! [`ChklistError::Terminal`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort chklist before (or while) driving the terminal.
#[derive(Debug, Error)]
pub enum ChklistError {
    /// `$HOME` could not be resolved, so the default list path is unknown.
    #[error("unable to determine the home directory")]
    HomeDirUnavailable,

    /// The list file could not be opened.
    #[error("cannot open checklist {}: {source}", .path.display())]
    ListOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The list path names something other than a regular file.
    #[error("cannot read checklist {}: {reason}", .path.display())]
    ListPath { path: PathBuf, reason: &'static str },

    /// Reading lines from an opened list failed.
    #[error("failed to read checklist: {0}")]
    ListRead(#[source] io::Error),

    /// Standard input or output is not attached to a terminal.
    #[error("standard {stream} is not a terminal")]
    NotATerminal { stream: &'static str },

    /// Raw mode, alternate screen or output to the terminal failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// A configuration value was rejected by validation.
    #[error("invalid value for {key}: {reason} (value: {value})")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ChklistError>;
