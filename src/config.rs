// Configuration module
// Internal representation of the resolved runtime configuration

use std::path::PathBuf;

use crate::error::{ChklistError, Result};
use crate::terminal::render::RenderMode;

/// Default number of entries a checklist holds before truncation.
pub const DEFAULT_CAPACITY: usize = 64;

/// Default glyph written into the marker cell of a completed item.
pub const DEFAULT_COMPLETED_CHAR: char = 'x';

/// Name of the list file looked up in the home directory.
pub const DEFAULT_LIST_NAME: &str = ".todo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Explicit list file; `None` means `$HOME/.todo`
    pub list_path: Option<PathBuf>,
    pub completed_char: char,
    pub render_mode: RenderMode,
    /// Maximum number of entries loaded from the list
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_path: None,
            completed_char: DEFAULT_COMPLETED_CHAR,
            render_mode: RenderMode::Inline,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Reject values the renderer cannot draw sensibly.
    ///
    /// The marker cell is exactly one column wide, so the completed glyph
    /// must be a single printable ASCII character distinct from the blank
    /// marker.
    pub fn validate(&self) -> Result<()> {
        let c = self.completed_char;
        if !c.is_ascii_graphic() {
            return Err(ChklistError::InvalidConfig {
                key: "completed_char",
                value: c.to_string(),
                reason: if c == ' ' {
                    "must differ from the blank marker"
                } else {
                    "must be a printable ASCII character"
                },
            });
        }

        if self.capacity == 0 {
            return Err(ChklistError::InvalidConfig {
                key: "capacity",
                value: self.capacity.to_string(),
                reason: "must be at least 1",
            });
        }

        Ok(())
    }
}
