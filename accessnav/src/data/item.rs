use crate::announce::join_trimmed;

/// An entry a level lists.
///
/// The engine only ever reads the label and the optional detail line; what
/// activating an item does is decided by the [`DataProvider`](crate::DataProvider).
pub trait Item {
    /// Display label spoken as the primary line.
    fn label(&self) -> String;

    /// Optional secondary line.
    fn detail(&self) -> Option<String> {
        None
    }
}

impl Item for String {
    fn label(&self) -> String {
        self.clone()
    }
}

/// What the cursor of a level currently points at.
#[derive(Debug)]
pub enum Selected<'a, I> {
    /// A real item fetched from the provider.
    Item(&'a I),
    /// The level's synthetic entry: the trailing "Add ..." row, or the static
    /// line of a level that has no list.
    Synthetic,
}

impl<I> Clone for Selected<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Selected<'_, I> {}

impl<'a, I> Selected<'a, I> {
    /// The selected item, if the cursor is not on the synthetic entry.
    pub fn item(self) -> Option<&'a I> {
        match self {
            Selected::Item(item) => Some(item),
            Selected::Synthetic => None,
        }
    }

    /// Whether the cursor is on the synthetic entry.
    pub fn is_synthetic(self) -> bool {
        matches!(self, Selected::Synthetic)
    }
}

/// One information line of a [`Description`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// Spoken as is.
    Line(String),
    /// Facts spoken on one line after `prefix`, joined with the configured
    /// separator. Skipped when every part is blank.
    List { prefix: String, parts: Vec<String> },
}

impl Detail {
    /// Text of the line, or `None` for a list with nothing in it.
    pub fn render(&self, separator: &str) -> Option<String> {
        match self {
            Detail::Line(line) => Some(line.clone()),
            Detail::List { prefix, parts } => {
                let joined = join_trimmed(parts, separator);
                (!joined.is_empty()).then(|| format!("{prefix}{joined}"))
            }
        }
    }
}

/// Spoken content for the selected entry: a label plus any number of
/// information lines (current value, status, requirements).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    /// Primary line.
    pub label: String,
    /// Information lines, spoken in order after the label.
    pub details: Vec<Detail>,
}

impl Description {
    /// Create a description with just a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            details: Vec::new(),
        }
    }

    /// Describe an item by its own label and detail line.
    pub fn of(item: &impl Item) -> Self {
        Self::new(item.label()).with_optional_detail(item.detail())
    }

    /// Append an information line.
    pub fn with_detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(Detail::Line(line.into()));
        self
    }

    /// Append an information line when present.
    pub fn with_optional_detail(mut self, line: Option<String>) -> Self {
        self.details.extend(line.map(Detail::Line));
        self
    }

    /// Append a line listing `parts`, e.g. "Requires: wood, steel".
    pub fn with_list<S: Into<String>>(
        mut self,
        prefix: impl Into<String>,
        parts: impl IntoIterator<Item = S>,
    ) -> Self {
        self.details.push(Detail::List {
            prefix: prefix.into(),
            parts: parts.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Information lines as spoken, lists joined with `separator`.
    pub fn detail_lines(&self, separator: &str) -> Vec<String> {
        self.details
            .iter()
            .filter_map(|detail| detail.render(separator))
            .collect()
    }
}
