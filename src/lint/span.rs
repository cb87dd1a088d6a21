//! Source ranges.
//!
//! A [`TextRange`] is a span on a single line of a document, expressed in
//! 0-indexed characters the way editors address text.

/// A range of characters on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
    /// Line number (0-indexed).
    pub line: usize,
    /// First character (0-indexed, inclusive).
    pub start: usize,
    /// End character (0-indexed, exclusive).
    pub end: usize,
}

impl TextRange {
    /// Create a range on `line` from `start` to `end`.
    pub fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the range covers nothing (an insertion point).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve this range to byte offsets within `line_text`.
    ///
    /// Returns `None` when the range runs past the end of the line.
    pub fn byte_range(&self, line_text: &str) -> Option<std::ops::Range<usize>> {
        if self.start > self.end {
            return None;
        }
        let start = char_to_byte(line_text, self.start)?;
        let end = char_to_byte(line_text, self.end)?;
        Some(start..end)
    }
}

/// Byte offset of the `index`-th character, allowing one-past-the-end.
pub(crate) fn char_to_byte(text: &str, index: usize) -> Option<usize> {
    if index == text.chars().count() {
        return Some(text.len());
    }
    text.char_indices().nth(index).map(|(byte, _)| byte)
}

/// Character offset of a byte position.
pub(crate) fn byte_to_char(text: &str, byte: usize) -> usize {
    text[..byte.min(text.len())].chars().count()
}
