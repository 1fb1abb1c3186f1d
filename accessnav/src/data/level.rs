use crate::{data::item::Selected, selection};

/// Static presentation of a level.
///
/// Returned by [`DataProvider::level_info`](crate::DataProvider::level_info)
/// and consulted whenever the level is entered or announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelInfo {
    /// Noun used in the position line, e.g. `Setting` in "Setting 2 of 3".
    pub noun: String,
    /// Fixed call-to-action line, e.g. "Press Enter to change".
    pub call_to_action: String,
    /// Label of a synthetic entry appended after the fetched items.
    pub trailing: Option<String>,
    /// Primary line of a level that has no item list at all.
    pub static_line: Option<String>,
}

impl LevelInfo {
    /// Describe a list level by its position noun and call to action.
    pub fn new(noun: impl Into<String>, call_to_action: impl Into<String>) -> Self {
        Self {
            noun: noun.into(),
            call_to_action: call_to_action.into(),
            trailing: None,
            static_line: None,
        }
    }

    /// Append a synthetic entry (such as "Add bill") after the fetched items.
    pub fn with_trailing(mut self, label: impl Into<String>) -> Self {
        self.trailing = Some(label.into());
        self
    }

    /// Turn the level into a static one: no list, just this line.
    pub fn with_static_line(mut self, line: impl Into<String>) -> Self {
        self.static_line = Some(line.into());
        self
    }

    /// Whether the level shows a fixed line instead of a list.
    pub fn is_static(&self) -> bool {
        self.static_line.is_some()
    }
}

/// State of one visited level: its items and its cursor.
///
/// Items are replaced wholesale by [`Frame::refresh`]; they are never patched
/// in place.
#[derive(Debug, Clone)]
pub struct Frame<L, I> {
    /// Level this frame belongs to.
    pub level: L,
    items: Vec<I>,
    cursor: usize,
    trailing: bool,
    fixed: bool,
}

impl<L: Copy, I> Frame<L, I> {
    /// Create a frame with the cursor on the first entry.
    pub fn new(level: L, info: &LevelInfo, items: Vec<I>) -> Self {
        let items = if info.is_static() { Vec::new() } else { items };
        Self {
            level,
            items,
            cursor: 0,
            trailing: info.trailing.is_some() && !info.is_static(),
            fixed: info.is_static(),
        }
    }

    /// Fetched items, without the synthetic entry.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Zero-based cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries the user can move through, including the
    /// synthetic trailing entry. Static levels have none.
    pub fn display_count(&self) -> usize {
        self.items.len() + usize::from(self.trailing)
    }

    /// Whether this is a static level.
    pub fn is_static(&self) -> bool {
        self.fixed
    }

    /// The entry under the cursor, or `None` when the list is empty or the
    /// cursor is stale.
    pub fn selected(&self) -> Option<Selected<'_, I>> {
        if self.fixed {
            return Some(Selected::Synthetic);
        }
        if let Some(item) = self.items.get(self.cursor) {
            return Some(Selected::Item(item));
        }
        if self.trailing && self.cursor == self.items.len() {
            return Some(Selected::Synthetic);
        }
        None
    }

    /// Move the cursor one entry forward, wrapping. Returns `false` when
    /// there is nothing to move through.
    pub fn select_next(&mut self) -> bool {
        let count = self.display_count();
        if count == 0 {
            return false;
        }
        self.cursor = selection::next(self.cursor, count);
        true
    }

    /// Move the cursor one entry back, wrapping. Returns `false` when there
    /// is nothing to move through.
    pub fn select_previous(&mut self) -> bool {
        let count = self.display_count();
        if count == 0 {
            return false;
        }
        self.cursor = selection::previous(self.cursor, count);
        true
    }

    /// Put the cursor on a specific entry, clamped to the list.
    pub fn select(&mut self, index: usize) {
        self.cursor = selection::clamp(index, self.display_count());
    }

    /// Replace the items with a freshly fetched list and repair the cursor.
    pub fn refresh(&mut self, items: Vec<I>) {
        if !self.fixed {
            self.items = items;
        }
        self.cursor = selection::clamp(self.cursor, self.display_count());
    }
}
