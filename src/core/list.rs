//! ListStore: the ordered checklist entries and their completion flags.
//! Pure data - no cursor, no terminal state (those belong to the navigator
//! and the renderer).

use std::io::BufRead;

/// A single checklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    label: String,
    completed: bool,
}

impl Item {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            completed: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Bounded, load-ordered sequence of items.
///
/// The bound is fixed when the list is loaded; anything past it is dropped
/// and counted in [`ListStore::truncated`]. The list never grows, shrinks
/// or reorders afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStore {
    items: Vec<Item>,
    truncated: usize,
}

impl ListStore {
    /// Build a list from in-memory lines.
    ///
    /// Trailing `\n` / `\r\n` are stripped and empty lines skipped. At most
    /// `capacity` items are kept.
    pub fn load<I, S>(lines: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::with_bound(capacity);
        for line in lines {
            store.push_line(line.as_ref(), capacity);
        }
        store.log_loaded(capacity);
        store
    }

    /// Read lines from `reader` under the same rules as [`ListStore::load`].
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, and
    /// lines past `capacity` are counted without being kept in memory.
    pub fn from_reader<R: BufRead>(mut reader: R, capacity: usize) -> std::io::Result<Self> {
        let mut store = Self::with_bound(capacity);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            store.push_line(&String::from_utf8_lossy(&buf), capacity);
        }
        store.log_loaded(capacity);
        Ok(store)
    }

    fn with_bound(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(crate::config::DEFAULT_CAPACITY)),
            truncated: 0,
        }
    }

    fn push_line(&mut self, line: &str, capacity: usize) {
        let label = strip_line_ending(line);
        if label.is_empty() {
            return;
        }
        if self.items.len() < capacity {
            self.items.push(Item::new(label));
        } else {
            self.truncated += 1;
        }
    }

    fn log_loaded(&self, capacity: usize) {
        if self.truncated > 0 {
            tracing::warn!(
                capacity,
                dropped = self.truncated,
                "checklist exceeds capacity, extra lines dropped"
            );
        }
        tracing::debug!(items = self.items.len(), "checklist loaded");
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Number of non-empty lines dropped because the list was full.
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    /// Set the completion flag of the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_completed(&mut self, index: usize, value: bool) {
        self.items[index].completed = value;
    }

    /// Flip the completion flag of the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn toggle(&mut self, index: usize) {
        let item = &mut self.items[index];
        item.completed = !item.completed;
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
