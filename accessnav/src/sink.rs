//! Output boundaries of the engine.
//!
//! The engine never plays audio or talks to a screen reader itself. It hands
//! plain text to a [`SpeechSink`], cue names to a [`CueSink`], and tells an
//! optional [`FocusRestore`] when the user backs out of the root level.
//! All three are fire-and-forget.

use std::sync::LazyLock;

use regex::Regex;

/// Urgency of a spoken message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Regular announcements.
    Normal,
    /// Rejections that should interrupt whatever is being spoken.
    High,
}

/// Short non-speech sounds played on state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A session was opened.
    Open,
    /// A session was closed.
    Close,
    /// A drill-down or action succeeded.
    Confirm,
    /// An action was refused.
    Reject,
    /// The cursor moved.
    Tick,
    /// Returned to a parent level.
    Back,
}

impl Cue {
    /// Lowercase name, e.g. for logging or sound file lookup.
    pub fn name(self) -> &'static str {
        match self {
            Cue::Open => "open",
            Cue::Close => "close",
            Cue::Confirm => "confirm",
            Cue::Reject => "reject",
            Cue::Tick => "tick",
            Cue::Back => "back",
        }
    }
}

/// Text-to-speech output.
pub trait SpeechSink {
    /// Speak `text`. The text is plain and may span several lines.
    fn speak(&mut self, text: &str, priority: Priority);
}

/// Audio cue output.
pub trait CueSink {
    /// Play `cue`.
    fn play(&mut self, cue: Cue);
}

/// An outer navigational context that wants to re-announce itself once the
/// menu it opened is dismissed.
pub trait FocusRestore {
    /// Called once, when the user cancels out of a root level.
    fn restore_focus(&mut self);
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SpeechSink for NullSink {
    fn speak(&mut self, _text: &str, _priority: Priority) {}
}

impl CueSink for NullSink {
    fn play(&mut self, _cue: Cue) {}
}

impl FocusRestore for NullSink {
    fn restore_focus(&mut self) {}
}

impl<T: SpeechSink + ?Sized> SpeechSink for Box<T> {
    fn speak(&mut self, text: &str, priority: Priority) {
        (**self).speak(text, priority);
    }
}

impl<T: CueSink + ?Sized> CueSink for Box<T> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }
}

const MARKUP_PATTERN: &str = r"</?[A-Za-z][^<>]*>";

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MARKUP_PATTERN).expect("valid markup pattern"));

/// Remove rich-text tags such as `<b>` or `<color=#ff0000>` and trim each
/// line, dropping lines that end up empty.
pub fn strip_markup(text: &str) -> String {
    let stripped = MARKUP.replace_all(text, "");
    stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
