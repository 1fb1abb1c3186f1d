//! Terminal sinks.
//!
//! Stand-ins for a text-to-speech engine and a sound player: spoken text is
//! printed, cues are printed as bracketed names. In raw mode the terminal does
//! not translate `\n`, so every line ends with `\r\n` there.

use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use accessnav::{Cue, CueSink, FocusRestore, Priority, SpeechSink};
use colored::Colorize;

/// A writer shared between the sinks of one session so their output stays
/// in order.
#[derive(Clone)]
pub struct Output {
    out: Rc<RefCell<Box<dyn Write>>>,
    raw: bool,
}

impl Output {
    pub fn new(out: impl Write + 'static, raw: bool) -> Self {
        Self {
            out: Rc::new(RefCell::new(Box::new(out))),
            raw,
        }
    }

    pub fn stdout(raw: bool) -> Self {
        Self::new(io::stdout(), raw)
    }

    fn write_lines<'a>(&self, lines: impl IntoIterator<Item = &'a str>) {
        let eol = if self.raw { "\r\n" } else { "\n" };
        let mut out = self.out.borrow_mut();
        let result = lines
            .into_iter()
            .try_for_each(|line| write!(out, "{line}{eol}"))
            .and_then(|_| out.flush());
        if let Err(e) = result {
            warn!("terminal output failed: {e}");
        }
    }
}

/// Prints what would be spoken. High priority messages stand out in red.
pub struct TerminalSpeech {
    out: Output,
}

impl TerminalSpeech {
    pub fn new(out: Output) -> Self {
        Self { out }
    }
}

impl SpeechSink for TerminalSpeech {
    fn speak(&mut self, text: &str, priority: Priority) {
        let lines = text.lines().map(|line| match priority {
            Priority::Normal => line.normal().to_string(),
            Priority::High => line.red().bold().to_string(),
        });
        let lines: Vec<String> = lines.chain(std::iter::once(String::new())).collect();
        self.out.write_lines(lines.iter().map(String::as_str));
    }
}

/// Prints cue names, e.g. `[tick]`.
pub struct TerminalCues {
    out: Output,
}

impl TerminalCues {
    pub fn new(out: Output) -> Self {
        Self { out }
    }
}

impl CueSink for TerminalCues {
    fn play(&mut self, cue: Cue) {
        let label = format!("[{}]", cue.name());
        let label = match cue {
            Cue::Reject => label.yellow(),
            _ => label.dimmed(),
        };
        self.out.write_lines([label.to_string().as_str()]);
    }
}

/// The view the menu was opened from. Announces itself again when the user
/// backs out of the menu.
pub struct OuterFocus {
    announcement: String,
    speech: TerminalSpeech,
}

impl OuterFocus {
    pub fn new(announcement: impl Into<String>, out: Output) -> Self {
        Self {
            announcement: announcement.into(),
            speech: TerminalSpeech::new(out),
        }
    }
}

impl FocusRestore for OuterFocus {
    fn restore_focus(&mut self) {
        self.speech.speak(&self.announcement, Priority::Normal);
    }
}
