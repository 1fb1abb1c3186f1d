//! Concrete menus over a shared [`World`].
//!
//! Both menus operate on one colonist, identified by a [`PawnRef`]. They hold
//! the world through `Rc<RefCell<_>>` so the host can keep reading it (and
//! save it) after the menu closes.

use std::{cell::RefCell, rc::Rc};

use clap::ValueEnum;

use crate::world::{Colonist, World};

pub mod operations;
pub mod settings;

pub use operations::OperationsMenu;
pub use settings::SettingsMenu;

pub type SharedWorld = Rc<RefCell<World>>;

/// The colonist a menu is open on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PawnRef {
    pub index: usize,
    pub name: String,
}

impl PawnRef {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    /// The colonist this reference points to, if it is still there.
    pub fn resolve<'w>(&self, world: &'w World) -> Option<&'w Colonist> {
        world
            .colonists
            .get(self.index)
            .filter(|c| c.name == self.name)
    }

    pub fn resolve_mut<'w>(&self, world: &'w mut World) -> Option<&'w mut Colonist> {
        world
            .colonists
            .get_mut(self.index)
            .filter(|c| c.name == self.name)
    }
}

/// Menu family selector.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKind {
    /// A colonist's settings.
    Settings,
    /// A colonist's operation queue.
    Operations,
}
