//! Dictionary-based word segmentation for scripts written without spaces
//!
//! Given a sorted wordlist, the segmenter splits a string into the sequence
//! of segments that contains the fewest non-dictionary tokens and, among
//! those, the fewest segments overall.
//!
//! # Algorithm
//!
//! - **Acceptors**: at every character position a cursor is opened over the
//!   whole dictionary. Each following character narrows the cursor's range
//!   with two binary searches; an empty range drops it.
//! - **Trellis**: node `i` stores the cheapest known path from the text
//!   start to position `i`. Every cursor that completes a word at `i`
//!   proposes an edge; when none does, a single unknown character is
//!   consumed instead.
//! - **Backtracking**: following predecessor pointers from the last node
//!   yields the segment ranges.
//!
//! The whole pass is a single forward scan over Unicode scalar values.
//!
//! # Example
//!
//! ```rust
//! use tadkham_core::{segment, Dictionary};
//!
//! let dict = Dictionary::from_words(["ตัด", "ตัดคำ", "คำ", "ไหม"]);
//! assert_eq!(segment("ตัดคำไหม", &dict), vec!["ตัดคำ", "ไหม"]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(not(feature = "alloc"))]
compile_error!("tadkham-core requires the `alloc` feature");

extern crate alloc;

pub mod acceptor;
pub mod dictionary;
pub mod error;
pub mod path;
pub mod trellis;
pub mod types;

use alloc::{string::String, vec::Vec};

pub use acceptor::{Acceptor, AcceptorSet};
pub use dictionary::{seek, Dictionary, Direction};
pub use error::{CoreError, Result};
pub use path::{extract_ranges, extract_spans};
pub use trellis::{build_edges, select_best, Edge, Trellis};
pub use types::{Span, TextRange, TokenKind};

/// Segment ranges for already-decoded text
pub fn find_ranges(text: &[char], dict: &Dictionary) -> Vec<TextRange> {
    Trellis::build(text, dict).ranges()
}

/// Segment ranges with match kinds for already-decoded text
pub fn find_spans(text: &[char], dict: &Dictionary) -> Vec<Span> {
    Trellis::build(text, dict).spans()
}

/// Split `text` into segments
///
/// The concatenation of the result equals `text`. Empty input yields no
/// segments.
pub fn segment(text: &str, dict: &Dictionary) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    find_ranges(&chars, dict)
        .into_iter()
        .map(|range| range.slice(&chars))
        .collect()
}
