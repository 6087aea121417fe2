//! Core types shared by the trellis and the path extractor

use alloc::string::String;
use core::fmt;
use core::ops::Range;

/// A half-open `[start, end)` range of character offsets in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    /// First character of the segment
    pub start: usize,
    /// One past the last character of the segment
    pub end: usize,
}

impl TextRange {
    /// Create a new range
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of characters covered by the range
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no characters
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The range as a `core::ops::Range`
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Collect the characters covered by this range into a string
    ///
    /// # Panics
    /// Panics if the range lies outside `chars`.
    pub fn slice(&self, chars: &[char]) -> String {
        chars[self.as_range()].iter().collect()
    }
}

impl From<TextRange> for Range<usize> {
    fn from(range: TextRange) -> Self {
        range.as_range()
    }
}

/// Whether a segment was matched against the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Full dictionary entry
    Word,
    /// Single character with no dictionary word ending on it
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word => write!(f, "word"),
            TokenKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// A segment range together with its match kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Character range of the segment
    pub range: TextRange,
    /// Match kind
    pub kind: TokenKind,
}

impl Span {
    /// Create a new span
    pub fn new(range: TextRange, kind: TokenKind) -> Self {
        Self { range, kind }
    }
}
