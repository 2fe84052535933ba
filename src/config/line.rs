//! Line model for configuration text.

/// A single line of configuration text.
///
/// Records the line's zero-based position in the source document and its raw
/// text with leading whitespace preserved. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    index: usize,
    text: String,
}

impl ConfigLine {
    pub(crate) fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// The line's zero-based position in the source document.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The raw line text, leading whitespace included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Indentation depth: the number of leading whitespace characters.
    pub fn depth(&self) -> usize {
        self.text.len() - self.text.trim_start().len()
    }

    /// Whether this is a top-level (unindented) line.
    pub fn is_root(&self) -> bool {
        self.depth() == 0
    }
}

impl std::fmt::Display for ConfigLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
