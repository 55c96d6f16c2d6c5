//! The checklist state machine.
//!
//! [`Navigator`] owns the [`ListStore`] and the selection index. Each key is
//! first reduced to a [`Transition`] (pure state change, no I/O), then the
//! transition is handed to the [`Renderer`] to produce output bytes. The
//! navigator never looks at the render mode; the renderer alone decides how
//! a motion or redraw is expressed on screen.
//!
//! Selection invariant: `selection < list.len()` whenever the list is
//! non-empty. With an empty list every key except quit is a no-op.

use std::io::{self, Write};

use crate::core::input::Key;
use crate::core::list::ListStore;
use crate::terminal::render::Renderer;

/// Relative cursor movement in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up(usize),
    Down(usize),
}

/// What a single key did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    /// Cursor move to apply before any redraw
    pub motion: Option<Motion>,
    /// A marker glyph changed; the list must be redrawn
    pub redraw: bool,
    /// The main loop should stop
    pub quit: bool,
}

impl Transition {
    fn moved(motion: Motion) -> Self {
        Self {
            motion: Some(motion),
            ..Self::default()
        }
    }

    fn edited(motion: Option<Motion>) -> Self {
        Self {
            motion,
            redraw: true,
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }
}

/// Loop control returned by [`Navigator::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Navigator {
    list: ListStore,
    selection: usize,
    renderer: Renderer,
}

impl Navigator {
    pub fn new(list: ListStore, renderer: Renderer) -> Self {
        Self {
            list,
            selection: 0,
            renderer,
        }
    }

    pub fn list(&self) -> &ListStore {
        &self.list
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Apply `key` to the state without producing any output.
    pub fn apply(&mut self, key: Key) -> Transition {
        if key == Key::Quit {
            return Transition::quit();
        }
        if self.list.is_empty() {
            return Transition::default();
        }

        let last = self.list.len() - 1;
        if last == 0 && matches!(key, Key::Up | Key::Down) {
            return Transition::default();
        }

        match key {
            Key::Up => {
                if self.selection > 0 {
                    self.selection -= 1;
                    Transition::moved(Motion::Up(1))
                } else {
                    self.selection = last;
                    Transition::moved(Motion::Down(last))
                }
            }
            Key::Down => {
                if self.selection < last {
                    self.selection += 1;
                    Transition::moved(Motion::Down(1))
                } else {
                    self.selection = 0;
                    Transition::moved(Motion::Up(last))
                }
            }
            Key::Uncheck => {
                self.list.set_completed(self.selection, false);
                if self.selection > 0 {
                    self.selection -= 1;
                    Transition::edited(Some(Motion::Up(1)))
                } else {
                    Transition::edited(None)
                }
            }
            Key::Check => {
                self.list.set_completed(self.selection, true);
                if self.selection < last {
                    self.selection += 1;
                    Transition::edited(Some(Motion::Down(1)))
                } else {
                    Transition::edited(None)
                }
            }
            Key::Toggle => {
                self.list.toggle(self.selection);
                Transition::edited(None)
            }
            Key::Quit | Key::Other(_) => Transition::default(),
        }
    }

    /// Apply `key` and write the resulting cursor move and/or redraw.
    pub fn handle_key<W: Write>(&mut self, key: Key, out: &mut W) -> io::Result<Flow> {
        let transition = self.apply(key);
        tracing::trace!(%key, selection = self.selection, ?transition, "key handled");

        if transition.quit {
            return Ok(Flow::Quit);
        }
        if let Some(motion) = transition.motion {
            self.renderer.move_cursor(out, motion)?;
        }
        if transition.redraw {
            self.renderer.draw(out, &self.list, self.selection)?;
        }
        Ok(Flow::Continue)
    }

    /// Draw the whole list at the current selection.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.renderer.draw(out, &self.list, self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::render::RenderMode;

    fn navigator(labels: &[&str]) -> Navigator {
        Navigator::new(
            ListStore::load(labels.iter().copied(), 64),
            Renderer::new(RenderMode::Inline, 'x'),
        )
    }

    fn glyphs(nav: &Navigator) -> String {
        nav.list()
            .iter()
            .map(|item| nav.renderer().glyph(item.is_completed()))
            .collect()
    }

    fn feed(nav: &mut Navigator, keys: &[u8]) {
        for &b in keys {
            nav.apply(Key::from_byte(b));
        }
    }

    #[test]
    fn test_down_then_up_returns() {
        let mut nav = navigator(&["a", "b", "c"]);
        assert_eq!(nav.apply(Key::Down).motion, Some(Motion::Down(1)));
        assert_eq!(nav.selection(), 1);
        assert_eq!(nav.apply(Key::Up).motion, Some(Motion::Up(1)));
        assert_eq!(nav.selection(), 0);
    }

    #[test]
    fn test_up_wraps_to_bottom() {
        let mut nav = navigator(&["a", "b", "c", "d"]);
        let t = nav.apply(Key::Up);
        assert_eq!(nav.selection(), 3);
        assert_eq!(t.motion, Some(Motion::Down(3)));
        assert!(!t.redraw);
    }

    #[test]
    fn test_down_wraps_to_top() {
        let mut nav = navigator(&["a", "b", "c"]);
        feed(&mut nav, b"jj");
        let t = nav.apply(Key::Down);
        assert_eq!(nav.selection(), 0);
        assert_eq!(t.motion, Some(Motion::Up(2)));
    }

    #[test]
    fn test_single_item_navigation_is_degenerate() {
        let mut nav = navigator(&["only"]);
        for key in [Key::Down, Key::Up, Key::Down, Key::Down, Key::Up] {
            assert_eq!(nav.apply(key), Transition::default());
            assert_eq!(nav.selection(), 0);
        }

        let mut out = Vec::new();
        nav.handle_key(Key::Down, &mut out).unwrap();
        nav.handle_key(Key::Up, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_list_only_quits() {
        let mut nav = navigator(&[]);
        let mut out = Vec::new();
        for b in [b'j', b'k', b' ', b'\n', 0x7f, b'z'] {
            assert_eq!(nav.handle_key(Key::from_byte(b), &mut out).unwrap(), Flow::Continue);
        }
        assert!(out.is_empty());
        assert_eq!(nav.handle_key(Key::Quit, &mut out).unwrap(), Flow::Quit);
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_marks_and_advances() {
        let mut nav = navigator(&["a", "b"]);
        let t = nav.apply(Key::Check);
        assert_eq!(glyphs(&nav), "x ");
        assert_eq!(nav.selection(), 1);
        assert_eq!(t.motion, Some(Motion::Down(1)));
        assert!(t.redraw);

        // last row: no advance, no wrap
        let t = nav.apply(Key::Check);
        assert_eq!(glyphs(&nav), "xx");
        assert_eq!(nav.selection(), 1);
        assert_eq!(t.motion, None);
    }

    #[test]
    fn test_uncheck_clears_and_retreats() {
        let mut nav = navigator(&["a", "b"]);
        feed(&mut nav, b"\n\n");
        let t = nav.apply(Key::Uncheck);
        assert_eq!(glyphs(&nav), "x ");
        assert_eq!(nav.selection(), 0);
        assert_eq!(t.motion, Some(Motion::Up(1)));

        // first row: no retreat, no wrap
        let t = nav.apply(Key::Uncheck);
        assert_eq!(glyphs(&nav), "  ");
        assert_eq!(nav.selection(), 0);
        assert_eq!(t.motion, None);
        assert!(t.redraw);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut nav = navigator(&["a"]);
        nav.apply(Key::Toggle);
        assert_eq!(glyphs(&nav), "x");
        nav.apply(Key::Toggle);
        assert_eq!(glyphs(&nav), " ");
    }

    #[test]
    fn test_ignored_key_changes_nothing() {
        let mut nav = navigator(&["a", "b"]);
        let before = nav.list().clone();
        assert_eq!(nav.apply(Key::Other(b'z')), Transition::default());
        assert_eq!(nav.list(), &before);
        assert_eq!(nav.selection(), 0);
    }

    #[test]
    fn test_walkthrough_example() {
        let mut nav = navigator(&["Buy milk", "Walk dog", "Pay bills"]);
        feed(&mut nav, b"jj");
        assert_eq!(nav.selection(), 2);
        feed(&mut nav, b"\n");
        assert_eq!(nav.selection(), 2);
        feed(&mut nav, b"k");
        assert_eq!(nav.selection(), 1);
        feed(&mut nav, &[0x7f]);
        assert_eq!(glyphs(&nav), "  x");
        assert_eq!(nav.selection(), 0);
        assert!(nav.apply(Key::from_byte(b'q')).quit);
    }

    #[test]
    fn test_handle_key_moves_before_redraw() {
        let mut nav = navigator(&["a", "b"]);
        let mut out = Vec::new();
        nav.handle_key(Key::Check, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        // cursor steps down first, then the redraw climbs back from row 1
        assert!(out.starts_with("\x1b[1B\x1b7\x1b[1A"));
        assert!(out.ends_with("\x1b8"));
    }
}
