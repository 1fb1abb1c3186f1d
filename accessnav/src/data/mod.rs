//! Navigation data structures.
//!
//! This module holds the engine's view of a menu:
//!
//! - [`item`] - The [`Item`] contract, [`Selected`] and [`Description`]
//! - [`level`] - Per-level presentation ([`LevelInfo`]) and state ([`Frame`])
//! - [`stack`] - The stack of visited levels

/// Items and descriptions.
pub mod item;

/// Level presentation and per-level state.
pub mod level;

/// Stack of visited levels.
pub mod stack;

pub use item::{Description, Detail, Item, Selected};
pub use level::{Frame, LevelInfo};
pub use stack::FrameStack;
