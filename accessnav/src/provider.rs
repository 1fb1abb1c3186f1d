//! The data provider contract.
//!
//! Each concrete menu (a settings editor, a work queue, a catalog) implements
//! [`DataProvider`] once. The provider defines the level graph, supplies
//! fresh item lists, decides what activating an entry does, and performs the
//! domain effect. It never holds on to engine state: everything it needs is
//! passed in through a [`Context`].

use std::fmt;

use crate::{
    data::{Description, Frame, Item, LevelInfo, Selected},
    error::ApplyError,
};

/// What activating the selected entry should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation<L> {
    /// Drill down into a child level. Refused when the child's list is empty.
    Enter(L),
    /// Perform a terminal action through [`DataProvider::apply`].
    Apply,
    /// Choose a target for the selected catalog entry from the given picker
    /// level. No targets refuses, one target applies directly, several open
    /// the picker.
    PickTarget(L),
    /// Nothing happens.
    Nothing,
}

/// Where the session goes after a successful [`DataProvider::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Then<L> {
    /// Stay on the current level and refresh it.
    Stay,
    /// Return to a level, refreshing it.
    Return(L),
    /// Close the session.
    Close,
}

/// Outcome of a successful apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied<L> {
    /// Next position.
    pub then: Then<L>,
    /// Confirmation spoken before the following announcement.
    pub notice: Option<String>,
    /// Cursor position on the level the session lands on. `None` keeps the
    /// level's own cursor.
    pub select: Option<usize>,
}

impl<L> Applied<L> {
    /// Stay on the current level.
    pub fn stay() -> Self {
        Self {
            then: Then::Stay,
            notice: None,
            select: None,
        }
    }

    /// Return to `level`.
    pub fn back_to(level: L) -> Self {
        Self {
            then: Then::Return(level),
            notice: None,
            select: None,
        }
    }

    /// Close the session.
    pub fn close() -> Self {
        Self {
            then: Then::Close,
            notice: None,
            select: None,
        }
    }

    /// Put the cursor on entry `index` of the level the session lands on.
    pub fn selecting(mut self, index: usize) -> Self {
        self.select = Some(index);
        self
    }

    /// Speak `notice` before the next announcement.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

/// Read-only view passed to every provider call.
///
/// `trail` holds the visited levels, entry level first. When a level's items
/// are being fetched the trail stops just below that level; for every other
/// call it ends with the current level.
pub struct Context<'a, P: DataProvider + ?Sized> {
    /// The entity the menu operates on.
    pub subject: &'a P::Subject,
    trail: &'a [Frame<P::Level, P::Item>],
}

impl<P: DataProvider + ?Sized> Clone for Context<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: DataProvider + ?Sized> Copy for Context<'_, P> {}

impl<'a, P: DataProvider + ?Sized> Context<'a, P> {
    /// Create a context over `subject` and the visited levels.
    pub fn new(subject: &'a P::Subject, trail: &'a [Frame<P::Level, P::Item>]) -> Self {
        Self { subject, trail }
    }

    /// What was selected on the closest visited frame for `level`.
    pub fn selected(&self, level: P::Level) -> Option<Selected<'a, P::Item>> {
        self.trail
            .iter()
            .rev()
            .find(|f| f.level == level)
            .and_then(Frame::selected)
    }

    /// The item selected on `level`, ignoring synthetic entries.
    pub fn item(&self, level: P::Level) -> Option<&'a P::Item> {
        self.selected(level).and_then(Selected::item)
    }

    /// Visited levels, entry level first.
    pub fn trail(&self) -> &'a [Frame<P::Level, P::Item>] {
        self.trail
    }
}

/// Contract every concrete menu implements.
///
/// The level type is a closed enum; there is no string-keyed branching
/// anywhere between the engine and the provider.
pub trait DataProvider {
    /// Screens of this menu.
    type Level: Copy + Eq + fmt::Debug;
    /// Entity the menu operates on. Held weakly by the session.
    type Subject;
    /// Entry type shared by all levels of this menu.
    type Item: Item;

    /// Level shown when the session opens.
    fn entry_level(&self) -> Self::Level;

    /// Level that Cancel returns to. `None` marks a root level: cancelling
    /// there closes the session.
    fn parent(&self, level: Self::Level) -> Option<Self::Level>;

    /// Presentation of `level`.
    fn level_info(&self, level: Self::Level) -> LevelInfo;

    /// Items of `level`. Called on every entry, so it must be cheap to repeat.
    /// An empty list is a normal answer.
    fn fetch(&self, level: Self::Level, ctx: &Context<'_, Self>) -> Vec<Self::Item>;

    /// Spoken content for the selected entry.
    ///
    /// Defaults to the item's own label and detail, or the level's synthetic
    /// label.
    fn describe(
        &self,
        level: Self::Level,
        selected: Selected<'_, Self::Item>,
        _ctx: &Context<'_, Self>,
    ) -> Description {
        match selected {
            Selected::Item(item) => Description::of(item),
            Selected::Synthetic => {
                let info = self.level_info(level);
                Description::new(info.trailing.or(info.static_line).unwrap_or_default())
            }
        }
    }

    /// What activating the selected entry does.
    fn activation(
        &self,
        level: Self::Level,
        selected: Selected<'_, Self::Item>,
        ctx: &Context<'_, Self>,
    ) -> Activation<Self::Level>;

    /// Perform the domain effect of activating the selected entry.
    ///
    /// # Errors
    ///
    /// Returns an [`ApplyError`] whose reason is spoken to the user; the
    /// session stays where it is.
    fn apply(
        &mut self,
        _level: Self::Level,
        _selected: Selected<'_, Self::Item>,
        _ctx: &Context<'_, Self>,
    ) -> Result<Applied<Self::Level>, ApplyError> {
        Ok(Applied::stay())
    }
}
