//! Partial-match cursors over the dictionary
//!
//! One acceptor is opened at every input position. Each subsequent
//! character narrows its dictionary range with two binary searches; once the
//! range is empty the acceptor is dropped from the set.

use alloc::vec::Vec;

use crate::dictionary::{Dictionary, Direction};

/// In-progress match of a dictionary word starting at an implicit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acceptor {
    /// Lowest dictionary index still consistent with the consumed prefix
    pub lo: usize,
    /// Highest dictionary index still consistent with the consumed prefix
    pub hi: usize,
    /// Characters consumed since the start position
    pub offset: usize,
    /// Consumed prefix is itself a full dictionary entry
    pub complete: bool,
    /// Range is non-empty
    pub alive: bool,
}

impl Acceptor {
    /// Fresh acceptor covering the whole dictionary
    ///
    /// An empty dictionary yields an acceptor that is already dead.
    pub fn start(dict: &Dictionary) -> Self {
        Self {
            lo: 0,
            hi: dict.len().saturating_sub(1),
            offset: 0,
            complete: false,
            alive: !dict.is_empty(),
        }
    }

    /// Consume one character
    ///
    /// After the LEFT search the shortest entry with the consumed prefix sits
    /// at `lo`, so checking its length alone detects an exact match even while
    /// longer entries stay in range.
    pub fn advance(&mut self, ch: char, dict: &Dictionary) {
        debug_assert!(self.alive, "dead acceptors are never advanced");

        let Some(lo) = dict.seek(Direction::Left, self.lo, self.hi, self.offset, ch) else {
            self.alive = false;
            self.complete = false;
            return;
        };
        // A left match guarantees a right match in the same block
        let hi = dict
            .seek(Direction::Right, lo, self.hi, self.offset, ch)
            .unwrap_or(lo);

        self.lo = lo;
        self.hi = hi;
        self.offset += 1;
        self.complete = dict.get(lo).is_some_and(|word| word.len() == self.offset);
    }

    /// Start position of the word this acceptor completes at `end`
    /// (the index of the last consumed character)
    pub fn start_position(&self, end: usize) -> usize {
        end + 1 - self.offset
    }
}

/// The live acceptors after some prefix of the input
///
/// Stepping consumes the set and returns its successor, so no acceptor is
/// ever shared between steps.
#[derive(Debug, Clone, Default)]
pub struct AcceptorSet {
    acceptors: Vec<Acceptor>,
}

impl AcceptorSet {
    /// Empty set, as before the first character
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an acceptor at the current position, advance all of them by
    /// `ch`, and keep the survivors
    ///
    /// Acceptors stay ordered by start position, oldest first.
    pub fn step_all(self, ch: char, dict: &Dictionary) -> Self {
        let mut acceptors = self.acceptors;
        acceptors.push(Acceptor::start(dict));
        acceptors.retain_mut(|acceptor| {
            if acceptor.alive {
                acceptor.advance(ch, dict);
            }
            acceptor.alive
        });
        Self { acceptors }
    }

    /// Acceptors whose consumed prefix is a full dictionary entry
    pub fn completed(&self) -> impl Iterator<Item = &Acceptor> + '_ {
        self.acceptors.iter().filter(|a| a.complete)
    }

    /// Iterate over all live acceptors
    pub fn iter(&self) -> impl Iterator<Item = &Acceptor> + '_ {
        self.acceptors.iter()
    }

    /// Number of live acceptors
    pub fn len(&self) -> usize {
        self.acceptors.len()
    }

    /// Whether no acceptor is live
    pub fn is_empty(&self) -> bool {
        self.acceptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_words(["ab", "abc", "b", "bcd"])
    }

    #[test]
    fn test_advance_narrows_range() {
        let dict = dict();
        let mut acceptor = Acceptor::start(&dict);
        acceptor.advance('a', &dict);
        assert!(acceptor.alive);
        assert_eq!((acceptor.lo, acceptor.hi), (0, 1));
        assert!(!acceptor.complete);

        acceptor.advance('b', &dict);
        assert!(acceptor.complete);
        assert_eq!(acceptor.offset, 2);

        acceptor.advance('c', &dict);
        assert!(acceptor.complete);
        assert_eq!((acceptor.lo, acceptor.hi), (1, 1));
    }

    #[test]
    fn test_advance_dies_on_mismatch() {
        let dict = dict();
        let mut acceptor = Acceptor::start(&dict);
        acceptor.advance('z', &dict);
        assert!(!acceptor.alive);
        assert!(!acceptor.complete);
    }

    #[test]
    fn test_start_on_empty_dictionary_is_dead() {
        let acceptor = Acceptor::start(&Dictionary::default());
        assert!(!acceptor.alive);
    }

    #[test]
    fn test_step_all_tracks_every_start_position() {
        let dict = dict();
        let set = AcceptorSet::new().step_all('a', &dict);
        assert_eq!(set.len(), 1);

        // "ab" completes from 0, "b" completes from 1
        let set = set.step_all('b', &dict);
        assert_eq!(set.len(), 2);
        let starts: Vec<usize> = set.completed().map(|a| a.start_position(1)).collect();
        assert_eq!(starts, vec![0, 1]);

        // "abc" still alive from 0, "bc" prefix alive from 1, "c" dies
        let set = set.step_all('c', &dict);
        assert_eq!(set.len(), 2);
        assert_eq!(set.completed().count(), 1);
    }

    #[test]
    fn test_step_all_prunes_dead_acceptors() {
        let dict = dict();
        let set = AcceptorSet::new().step_all('x', &dict).step_all('y', &dict);
        assert!(set.is_empty());
    }

    #[test]
    fn test_step_all_with_empty_dictionary() {
        let dict = Dictionary::default();
        let set = AcceptorSet::new().step_all('a', &dict);
        assert!(set.is_empty());
    }
}
