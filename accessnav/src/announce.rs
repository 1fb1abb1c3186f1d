//! Announcement rendering.
//!
//! An announcement answers "where am I and what can I do" in a fixed shape:
//!
//! 1. the selected entry's label (or the level's static line),
//! 2. the provider's information lines,
//! 3. the position line, `"<noun> <i+1> of <n>"`,
//! 4. the level's call to action.
//!
//! Rendering is a pure function of its inputs. The session makes sure it is
//! never asked to render a level whose list is empty.

use std::fmt;

use crate::{
    config::AnnounceConfig,
    data::{Description, Frame, LevelInfo},
    sink::strip_markup,
};

/// Rendered announcement text, one spoken line per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Announcement {
    lines: Vec<String>,
}

impl Announcement {
    /// Spoken lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Insert a line before everything else, e.g. a confirmation notice.
    pub fn prepend(&mut self, line: &str) {
        let line = strip_markup(line);
        if !line.is_empty() {
            self.lines.insert(0, line);
        }
    }

    /// Lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Render the announcement for `frame`.
///
/// `description` is the provider's description of the selected entry. Its
/// list lines are joined with [`AnnounceConfig::separator`].
pub fn render<L: Copy, I>(
    info: &LevelInfo,
    frame: &Frame<L, I>,
    description: &Description,
    config: &AnnounceConfig,
) -> Announcement {
    let mut lines = Vec::with_capacity(description.details.len() + 3);

    let label = description.label.as_str();
    let primary = match &info.static_line {
        Some(line) if frame.is_static() => line.as_str(),
        _ => label,
    };
    lines.push(primary.to_string());
    lines.extend(description.detail_lines(&config.separator));

    if config.position && !frame.is_static() {
        let count = frame.display_count();
        lines.push(position_line(&info.noun, frame.cursor(), count));
    }
    if config.hints {
        lines.push(info.call_to_action.clone());
    }

    Announcement {
        lines: lines
            .iter()
            .map(|line| strip_markup(line))
            .filter(|line| !line.is_empty())
            .collect(),
    }
}

/// `"<noun> <index+1> of <count>"`.
pub fn position_line(noun: &str, index: usize, count: usize) -> String {
    format!("{noun} {} of {count}", index + 1)
        .trim_start()
        .to_string()
}

/// Join `parts` with `separator`, trimming the separator left after the last
/// part.
///
/// Used for composed lines such as "Requires: wood, herbal medicine".
pub fn join_trimmed<S, I>(parts: I, separator: &str) -> String
where
    S: AsRef<str>,
    I: IntoIterator<Item = S>,
{
    let mut joined = String::new();
    for part in parts {
        let part = part.as_ref().trim();
        if part.is_empty() {
            continue;
        }
        joined.push_str(part);
        joined.push_str(separator);
    }
    match joined.strip_suffix(separator) {
        Some(trimmed) => trimmed.to_string(),
        None => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_frame(cursor: usize) -> (LevelInfo, Frame<u8, String>) {
        let info = LevelInfo::new("Setting", "Press Enter to change");
        let items = ["Food restriction", "Outfit", "Self-tend"];
        let mut frame = Frame::new(0, &info, items.map(String::from).to_vec());
        frame.select(cursor);
        (info, frame)
    }

    fn render_default(info: &LevelInfo, frame: &Frame<u8, String>, label: &str) -> Announcement {
        let desc = Description::new(label);
        render(info, frame, &desc, &AnnounceConfig::default())
    }

    #[test]
    fn test_render_shape() {
        let (info, frame) = settings_frame(1);
        let desc = Description::new("Outfit").with_detail("Current: Worker");
        let ann = render(&info, &frame, &desc, &AnnounceConfig::default());

        let expected = [
            "Outfit",
            "Current: Worker",
            "Setting 2 of 3",
            "Press Enter to change",
        ];
        assert_eq!(ann.lines(), expected);
    }

    #[test]
    fn test_render_joins_lists_with_separator() {
        let (info, frame) = settings_frame(0);
        let desc = Description::new("Food restriction").with_list("Allowed: ", ["Meals", "Raw"]);
        let config = AnnounceConfig {
            separator: " or ".to_string(),
            ..AnnounceConfig::default()
        };
        let ann = render(&info, &frame, &desc, &config);
        assert_eq!(ann.lines()[1], "Allowed: Meals or Raw");
    }

    #[test]
    fn test_render_counts_trailing_entry() {
        let info = LevelInfo::new("Operation", "Press Enter").with_trailing("Add operation");
        let mut frame = Frame::new(0, &info, vec!["a".to_string(), "b".to_string()]);
        frame.select(2);
        let ann = render_default(&info, &frame, "Add operation");
        assert_eq!(ann.lines()[1], "Operation 3 of 3");
    }

    #[test]
    fn test_render_respects_verbosity() {
        let (info, frame) = settings_frame(0);
        let config = AnnounceConfig {
            position: false,
            hints: false,
            ..AnnounceConfig::default()
        };
        let desc = Description::new("<b>Food restriction</b>");
        let ann = render(&info, &frame, &desc, &config);
        assert_eq!(ann.text(), "Food restriction");
    }

    #[test]
    fn test_render_static_level() {
        let info = LevelInfo::new("", "Press Enter to add").with_static_line("Add item");
        let frame = Frame::new(0, &info, Vec::new());
        let ann = render_default(&info, &frame, "ignored");
        assert_eq!(ann.lines(), ["Add item", "Press Enter to add"]);
    }

    #[test]
    fn test_prepend_notice() {
        let (info, frame) = settings_frame(0);
        let mut ann = render_default(&info, &frame, "Food restriction");
        ann.prepend("Outfit set to Soldier");
        assert_eq!(ann.lines()[0], "Outfit set to Soldier");
        assert_eq!(ann.lines().len(), 4);

        let text = ann.to_string();
        assert!(text.starts_with("Outfit set to Soldier\nFood restriction"));
    }

    #[test]
    fn test_join_trimmed() {
        let parts = ["wood", "herbal medicine"];
        assert_eq!(join_trimmed(parts, ", "), "wood, herbal medicine");
        assert_eq!(join_trimmed(["wood", "", " steel "], ", "), "wood, steel");
        assert_eq!(join_trimmed(Vec::<String>::new(), ", "), "");
        assert_eq!(join_trimmed(["only"], " and "), "only");
    }
}
