//! Token assembly
//!
//! The core works on character indices. This module maps its spans back onto
//! the original string so every token carries both character and byte
//! offsets alongside its text.

use std::ops::Range;
use tadkham_core::{find_spans, Dictionary, Span, TokenKind};

/// One segment of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Segment text, copied out of the input
    pub text: String,
    /// Position in characters
    pub char_range: Range<usize>,
    /// Position in bytes
    pub byte_range: Range<usize>,
    /// Dictionary word or unknown character
    pub kind: TokenKind,
}

impl Token {
    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.char_range.len()
    }

    /// Whether this segment is not a dictionary entry
    pub fn is_unknown(&self) -> bool {
        self.kind == TokenKind::Unknown
    }
}

/// Segment `text` and assemble the resulting tokens
pub fn tokenize(text: &str, dict: &Dictionary) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let spans = find_spans(&chars, dict);
    assemble_tokens(text, &spans)
}

/// Turn character spans over `text` into tokens
///
/// `spans` must lie within the character count of `text`.
pub fn assemble_tokens(text: &str, spans: &[Span]) -> Vec<Token> {
    // Byte offset of every character boundary, end of text included
    let byte_at: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();

    spans
        .iter()
        .map(|span| {
            let byte_range = byte_at[span.range.start]..byte_at[span.range.end];
            Token {
                text: text[byte_range.clone()].to_string(),
                char_range: span.range.as_range(),
                byte_range,
                kind: span.kind,
            }
        })
        .collect()
}
