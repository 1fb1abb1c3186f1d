//! # colonynav
//!
//! Keyboard and speech menus for a colony, built on [`accessnav`].
//!
//! `colonynav` loads a colony world from TOML and opens one of two menus on a
//! colonist. Speech is printed to the terminal and cues are shown as
//! bracketed names, so the menus can be tried without a screen reader.
//!
//! ## Menus
//!
//! - **Settings**: food restriction, outfit, medical care, hostility response
//!   and self-tend
//! - **Operations**: the colonist's surgery queue, with a recipe catalog and a
//!   body part picker for adding new operations
//!
//! ## Modules
//!
//! - [`app`] - Opening a menu from the command line
//! - [`menus`] - The settings and operations menus
//! - [`term`] - Terminal speech and cue sinks
//! - [`world`] - The colony world loaded from TOML

/// Opening a menu from the command line.
pub mod app;

/// The settings and operations menus.
pub mod menus;

/// Terminal speech and cue sinks.
pub mod term;

/// Colony world model and TOML loader.
pub mod world;

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;
