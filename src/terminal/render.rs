//! Terminal rendering module
//!
//! Turns checklist state into ANSI escape sequences, using crossterm
//! commands queued onto any [`Write`] sink. Nothing here touches the real
//! terminal directly: the caller decides where the bytes go, which keeps
//! every sequence testable against an in-memory buffer.
//!
//! Layout is one row per item:
//!
//! ```text
//! Buy milk:               [x]
//! Walk dog:               [ ]
//! ```
//!
//! The cursor rests on the marker glyph of the selected row. Pure
//! navigation only emits relative row moves; anything that changes a glyph
//! redraws the whole list between a cursor save and restore so the cursor
//! ends up where it started.

use std::io::{self, Write};

use crossterm::style::Print;
use crossterm::{cursor, queue, terminal};

use crate::core::list::ListStore;
use crate::core::navigation::Motion;

/// Zero-based column of the opening bracket (terminal column 25).
pub const MARKER_COLUMN: u16 = 24;

/// Zero-based column of the marker glyph; the cursor is parked here.
pub const GLYPH_COLUMN: u16 = MARKER_COLUMN + 1;

/// Glyph shown for an item that is not completed.
pub const BLANK_GLYPH: char = ' ';

/// Where the checklist is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Dedicated full-screen buffer; the original screen comes back on exit.
    AlternateBuffer,
    /// In place, below the shell prompt, in normal scrollback.
    #[default]
    Inline,
}

/// Escape-sequence generator for one render mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    mode: RenderMode,
    completed_char: char,
}

impl Renderer {
    pub fn new(mode: RenderMode, completed_char: char) -> Self {
        Self {
            mode,
            completed_char,
        }
    }

    /// The two glyphs a marker cell can ever hold.
    pub fn glyph(&self, completed: bool) -> char {
        if completed {
            self.completed_char
        } else {
            BLANK_GLYPH
        }
    }

    /// Prepare the screen area and park the cursor on row 0.
    ///
    /// Inline mode reserves `len` rows by emitting newlines (scrolling the
    /// terminal if needed) and climbing back up, so the later relative
    /// moves never run off the bottom of the screen.
    pub fn enter<W: Write>(&self, out: &mut W, len: usize) -> io::Result<()> {
        match self.mode {
            RenderMode::AlternateBuffer => {
                queue!(
                    out,
                    terminal::EnterAlternateScreen,
                    terminal::Clear(terminal::ClearType::All),
                    cursor::MoveTo(GLYPH_COLUMN, 0)
                )?;
            }
            RenderMode::Inline => {
                if len == 0 {
                    return Ok(());
                }
                queue!(out, Print("\r"), Print("\n".repeat(len)))?;
                queue!(out, cursor::MoveUp(rows(len)), cursor::MoveToColumn(GLYPH_COLUMN))?;
            }
        }
        Ok(())
    }

    /// Undo [`Renderer::enter`]; see [`leave_screen`].
    pub fn leave<W: Write>(&self, out: &mut W, len: usize, selection: usize) -> io::Result<()> {
        leave_screen(out, self.mode, len, selection)
    }

    /// Emit a relative row move; a zero-length move emits nothing.
    pub fn move_cursor<W: Write>(&self, out: &mut W, motion: Motion) -> io::Result<()> {
        match motion {
            Motion::Up(0) | Motion::Down(0) => {}
            Motion::Up(n) => queue!(out, cursor::MoveUp(rows(n)))?,
            Motion::Down(n) => queue!(out, cursor::MoveDown(rows(n)))?,
        }
        Ok(())
    }

    /// Redraw every item, leaving the cursor where it was.
    ///
    /// `selection` is the row the cursor currently sits on. Inline mode
    /// needs it to find row 0; the alternate buffer addresses rows
    /// absolutely and ignores it.
    pub fn draw<W: Write>(&self, out: &mut W, list: &ListStore, selection: usize) -> io::Result<()> {
        if list.is_empty() {
            return Ok(());
        }

        queue!(out, cursor::SavePosition)?;

        if self.mode == RenderMode::Inline && selection > 0 {
            queue!(out, cursor::MoveUp(rows(selection)))?;
        }

        let last = list.len() - 1;
        for (row, item) in list.iter().enumerate() {
            match self.mode {
                RenderMode::AlternateBuffer => queue!(out, cursor::MoveTo(0, rows(row)))?,
                RenderMode::Inline => queue!(out, cursor::MoveToColumn(0))?,
            }
            queue!(
                out,
                Print(item.label()),
                Print(":"),
                cursor::MoveToColumn(MARKER_COLUMN),
                Print(format!("[{}]", self.glyph(item.is_completed())))
            )?;
            if self.mode == RenderMode::Inline && row < last {
                queue!(out, cursor::MoveDown(1))?;
            }
        }

        queue!(out, cursor::RestorePosition)?;
        Ok(())
    }
}

/// Hand the screen area back from the row `selection` of a `len`-row list.
///
/// Inline mode moves from the selected row to just below the last item
/// so the shell prompt returns under the list instead of over it. Also used
/// by abnormal-exit cleanup, which has no [`Renderer`] at hand.
pub fn leave_screen<W: Write>(
    out: &mut W,
    mode: RenderMode,
    len: usize,
    selection: usize,
) -> io::Result<()> {
    match mode {
        RenderMode::AlternateBuffer => {
            queue!(out, terminal::LeaveAlternateScreen)?;
        }
        RenderMode::Inline => {
            if len == 0 {
                return Ok(());
            }
            let below = len - 1 - selection.min(len - 1);
            if below > 0 {
                queue!(out, cursor::MoveDown(rows(below)))?;
            }
            queue!(out, Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Row counts are bounded by the list capacity; saturate rather than wrap.
fn rows(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
