//! Free-text blocks carried verbatim between scores.

use serde::Serialize;

/// A markup block: raw text lines, kept in order and never tokenized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Markup {
    lines: Vec<String>,
}

impl Markup {
    /// Create an empty markup block, to be filled line by line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a markup block seeded with one line of text.
    pub fn with_line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The whole block as a single newline-joined string.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
