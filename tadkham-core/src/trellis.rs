//! Trellis construction: one node per character position, each holding the
//! best incoming edge found so far

use alloc::vec::Vec;

use crate::acceptor::AcceptorSet;
use crate::dictionary::Dictionary;
use crate::path::{extract_ranges, extract_spans};
use crate::types::{Span, TextRange};

/// Best-known path cost from text start to a node, plus its backpointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Segments on the path from the start node
    pub word_count: usize,
    /// Segments on that path that are not dictionary entries
    pub unknown_count: usize,
    /// Node this edge extends from; `None` only for the start node
    pub predecessor: Option<usize>,
}

impl Edge {
    /// Edge stored at node 0
    pub const START: Edge = Edge {
        word_count: 0,
        unknown_count: 0,
        predecessor: None,
    };

    /// Extend the path ending at node `from` with one dictionary word
    pub fn word(from: usize, source: &Edge) -> Self {
        Self {
            word_count: source.word_count + 1,
            unknown_count: source.unknown_count,
            predecessor: Some(from),
        }
    }

    /// Extend the path ending at node `from` with one unknown character
    pub fn unknown(from: usize, source: &Edge) -> Self {
        Self {
            word_count: source.word_count + 1,
            unknown_count: source.unknown_count + 1,
            predecessor: Some(from),
        }
    }

    /// Fewer unknown segments wins; fewer segments breaks the tie
    pub fn is_better_than(&self, other: &Edge) -> bool {
        (self.unknown_count, self.word_count) < (other.unknown_count, other.word_count)
    }
}

/// Candidate edges ending after the character at position `i`
///
/// `nodes` must hold the finalized nodes `0..=i`. One edge is produced per
/// completed acceptor. When no dictionary word ends here, the only candidate
/// consumes `text[i]` as an unknown token from node `i`.
pub fn build_edges(i: usize, acceptors: &AcceptorSet, nodes: &[Edge]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = acceptors
        .completed()
        .map(|acceptor| {
            let p = acceptor.start_position(i);
            Edge::word(p, &nodes[p])
        })
        .collect();

    if edges.is_empty() {
        edges.push(Edge::unknown(i, &nodes[i]));
    }
    edges
}

/// The best edge among `edges`, keeping the earliest of equal candidates
///
/// Edges built from an [`AcceptorSet`] come oldest acceptor first, so a tie
/// resolves to the longest word.
pub fn select_best(edges: &[Edge]) -> Option<Edge> {
    let (first, rest) = edges.split_first()?;
    Some(rest.iter().fold(*first, |best, edge| {
        if edge.is_better_than(&best) {
            *edge
        } else {
            best
        }
    }))
}

/// Node table for one input, `len + 1` entries long
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trellis {
    nodes: Vec<Edge>,
}

impl Trellis {
    /// Run the single forward pass over `text`
    pub fn build(text: &[char], dict: &Dictionary) -> Self {
        let mut nodes = Vec::with_capacity(text.len() + 1);
        nodes.push(Edge::START);

        let mut acceptors = AcceptorSet::new();
        for (i, &ch) in text.iter().enumerate() {
            acceptors = acceptors.step_all(ch, dict);
            let edges = build_edges(i, &acceptors, &nodes);
            let best = select_best(&edges).unwrap_or_else(|| Edge::unknown(i, &nodes[i]));
            nodes.push(best);
        }

        Self { nodes }
    }

    /// All nodes, indexed by character position
    pub fn nodes(&self) -> &[Edge] {
        &self.nodes
    }

    /// Node at position `i`
    pub fn node(&self, i: usize) -> Option<&Edge> {
        self.nodes.get(i)
    }

    /// Number of nodes (input length + 1)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the trellis was built from empty input
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Node at the end of the input
    pub fn last(&self) -> &Edge {
        // Always holds the start node
        &self.nodes[self.nodes.len() - 1]
    }

    /// Segments on the best path
    pub fn word_count(&self) -> usize {
        self.last().word_count
    }

    /// Unknown segments on the best path
    pub fn unknown_count(&self) -> usize {
        self.last().unknown_count
    }

    /// Segment ranges of the best path, left to right
    pub fn ranges(&self) -> Vec<TextRange> {
        extract_ranges(&self.nodes)
    }

    /// Segment ranges of the best path with their match kinds
    pub fn spans(&self) -> Vec<Span> {
        extract_spans(&self.nodes)
    }
}
