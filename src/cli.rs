//! Command-line argument parsing for chklist.
//!
//! This module provides the `Cli` struct which encapsulates all command-line
//! options and the method that layers them over a [`Config`].

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::terminal::render::RenderMode;

/// Command-line interface configuration.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "chklist",
    version,
    about = "Interactive terminal checklist for your todo file",
    after_help = "Keys: j/k move, Space toggles, Enter checks, Backspace unchecks, q quits"
)]
pub struct Cli {
    /// Glyph written into the marker of a completed item
    #[arg(short = 'c', long, value_name = "CHAR")]
    pub completed_char: Option<char>,

    /// Draw in the alternate screen buffer instead of inline
    #[arg(short = 'a', long)]
    pub alternate_buffer: bool,

    /// Checklist file to read (default: ~/.todo)
    #[arg(short = 'f', long, value_name = "PATH", env = "CHKLIST_FILE")]
    pub file: Option<PathBuf>,

    /// Maximum number of items loaded; extra lines are dropped
    #[arg(short = 'n', long, value_name = "N")]
    pub capacity: Option<usize>,
}

impl Cli {
    /// Apply CLI overrides to a configuration object.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(c) = self.completed_char {
            config.completed_char = c;
        }
        if self.alternate_buffer {
            config.render_mode = RenderMode::AlternateBuffer;
        }
        if let Some(path) = &self.file {
            config.list_path = Some(path.clone());
        }
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
    }
}
