//! # accessnav
//!
//! A navigation engine for people who browse menus by keyboard and speech
//! rather than by looking at a screen.
//!
//! The engine keeps a stack of menu levels, each with its own item list and
//! cursor, pulls fresh item lists from a [`DataProvider`] every time a level
//! is entered, and after every change speaks a short announcement of where the
//! user is and what they can do next.
//!
//! ## Features
//!
//! - Four logical actions: previous, next, activate (drill down) and cancel (back)
//! - Wrap-around selection on every level
//! - Per-menu level graphs with an explicit parent for every level
//! - Rejection of empty lists before any transition happens
//! - Catalog entries that auto-apply when exactly one target is eligible
//! - Speech, audio-cue and focus-restoration sinks as plain traits
//! - TOML configuration for verbosity and spoken messages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//!
//! use accessnav::{DataProvider, NavigationSession, Sinks, input::InputDispatcher};
//!
//! fn start<P: DataProvider<Subject = String>>(provider: P) {
//!     let mut session = NavigationSession::new(provider, Sinks::silent());
//!     let subject = Rc::new(String::from("Engie"));
//!
//!     let mut dispatcher = InputDispatcher::new(&mut session);
//!     dispatcher.open(Some(&subject));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`announce`] - Announcement rendering
//! - [`config`] - Engine configuration
//! - [`data`] - Items, level frames and the frame stack
//! - [`error`] - Error types
//! - [`input`] - Logical actions and the key dispatcher
//! - [`provider`] - The data provider contract
//! - [`run`] - Terminal key loop
//! - [`selection`] - Wrap-around cursor arithmetic
//! - [`session`] - The navigation state machine
//! - [`sink`] - Speech, cue and focus sinks

#[macro_use]
extern crate log;

/// Announcement rendering.
pub mod announce;

/// Engine configuration loaded from TOML.
pub mod config;

/// Items, level frames and the frame stack.
pub mod data;

/// Error types.
pub mod error;

/// Logical actions and the key dispatcher.
pub mod input;

/// The data provider contract implemented by every concrete menu.
pub mod provider;

/// Terminal key loop driving a dispatcher from crossterm events.
pub mod run;

/// Wrap-around cursor arithmetic.
pub mod selection;

/// The navigation state machine.
pub mod session;

/// Speech, cue and focus-restoration sinks.
pub mod sink;

pub use config::NavConfig;
pub use data::{Description, Detail, Item, LevelInfo, Selected};
pub use error::{ApplyError, ConfigError};
pub use provider::{Activation, Applied, Context, DataProvider, Then};
pub use session::{NavigationSession, Sinks};
pub use sink::{Cue, CueSink, FocusRestore, NullSink, Priority, SpeechSink};
