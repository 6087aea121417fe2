//! Backtracking from the final node to recover the segment ranges

use alloc::vec::Vec;

use crate::trellis::Edge;
use crate::types::{Span, TextRange, TokenKind};

/// Follow predecessor pointers from the last node back to node 0
///
/// Ranges come out left to right and cover `[0, nodes.len() - 1)` exactly.
pub fn extract_ranges(nodes: &[Edge]) -> Vec<TextRange> {
    let mut ranges = Vec::new();
    let mut end = nodes.len().saturating_sub(1);

    while end > 0 {
        let Some(start) = nodes[end].predecessor else {
            break;
        };
        debug_assert!(start < end, "predecessors always point backwards");
        ranges.push(TextRange::new(start, end));
        end = start;
    }

    ranges.reverse();
    ranges
}

/// Like [`extract_ranges`], tagging each range as a word or unknown token
///
/// A segment is unknown when its end node carries more unknown segments
/// than its start node.
pub fn extract_spans(nodes: &[Edge]) -> Vec<Span> {
    extract_ranges(nodes)
        .into_iter()
        .map(|range| {
            let kind = if nodes[range.end].unknown_count > nodes[range.start].unknown_count {
                TokenKind::Unknown
            } else {
                TokenKind::Word
            };
            Span::new(range, kind)
        })
        .collect()
}
