//! Sorted wordlist and the prefix binary search the acceptors run against it

use alloc::{string::String, vec::Vec};
use core::cmp::Ordering;

use crate::error::{CoreError, Result};

/// Which edge of a matching block `seek` should return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lowest matching index
    Left,
    /// Highest matching index
    Right,
}

/// Immutable wordlist in ascending order by Unicode scalar value
///
/// Sortedness is a precondition of every search and is not checked on
/// construction through [`Dictionary::from_sorted_words`]. Run
/// [`Dictionary::validate`] once after loading when the source is not
/// trusted, or build through [`Dictionary::from_words`] to sort instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Vec<char>>,
}

impl Dictionary {
    /// Build a dictionary from words the caller guarantees are sorted
    pub fn from_sorted_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().chars().collect())
                .collect(),
        }
    }

    /// Build a dictionary from arbitrary words, sorting and deduplicating them
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<Vec<char>> = words
            .into_iter()
            .map(|word| word.as_ref().chars().collect())
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Parse newline-separated dictionary content
    ///
    /// Every line becomes one entry. Empty lines are kept as zero-length
    /// entries, which sort first; the final line terminator does not open an
    /// extra entry. LF and CRLF endings are both accepted. The lines are
    /// trusted to be sorted.
    pub fn parse(content: &str) -> Self {
        Self::from_sorted_words(content.lines())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no entries at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entry at `index`, as characters
    pub fn get(&self, index: usize) -> Option<&[char]> {
        self.words.get(index).map(Vec::as_slice)
    }

    /// Iterate over all entries in order
    pub fn words(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.words.iter().map(Vec::as_slice)
    }

    /// Entry at `index` as an owned string
    pub fn word(&self, index: usize) -> Option<String> {
        self.get(index).map(|w| w.iter().collect())
    }

    /// Length in characters of the longest entry
    pub fn max_word_len(&self) -> usize {
        self.words.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Exact lookup by binary search
    pub fn contains(&self, word: &str) -> bool {
        let target: Vec<char> = word.chars().collect();
        self.words.binary_search(&target).is_ok()
    }

    /// Check the sortedness precondition
    ///
    /// Equal neighbours are accepted; they do not affect matching.
    pub fn validate(&self) -> Result<()> {
        match self
            .words
            .windows(2)
            .position(|pair| pair[1] < pair[0])
        {
            Some(i) => Err(CoreError::UnsortedDictionary { index: i + 1 }),
            None => Ok(()),
        }
    }

    /// Search `[lo, hi]` for entries whose character at `offset` is `ch`
    ///
    /// See [`seek`].
    pub fn seek(
        &self,
        direction: Direction,
        lo: usize,
        hi: usize,
        offset: usize,
        ch: char,
    ) -> Option<usize> {
        seek(direction, self, lo, hi, offset, ch)
    }
}

/// Binary search the inclusive range `[lo, hi]` of `dict` for the entries
/// whose character at `offset` equals `ch`
///
/// Entries too short to have a character at `offset` compare as smaller
/// than `ch`. Returns the lowest matching index for [`Direction::Left`],
/// the highest for [`Direction::Right`], or `None` when nothing in range
/// matches. All entries in `[lo, hi]` must share their first `offset`
/// characters and `hi` must be a valid index unless the range is empty.
pub fn seek(
    direction: Direction,
    dict: &Dictionary,
    lo: usize,
    hi: usize,
    offset: usize,
    ch: char,
) -> Option<usize> {
    if lo > hi || hi >= dict.len() {
        return None;
    }

    // Half-open window [l, r) so narrowing never underflows
    let mut l = lo;
    let mut r = hi + 1;
    let mut found = None;

    while l < r {
        let mid = l + (r - l) / 2;
        let ordering = match dict.words[mid].get(offset) {
            None => Ordering::Less,
            Some(c) => c.cmp(&ch),
        };
        match ordering {
            Ordering::Less => l = mid + 1,
            Ordering::Greater => r = mid,
            Ordering::Equal => {
                found = Some(mid);
                match direction {
                    Direction::Left => r = mid,
                    Direction::Right => l = mid + 1,
                }
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thai_dict() -> Dictionary {
        Dictionary::from_words(["ตัด", "ตัดคำ", "คำ", "ไหม"])
    }

    #[test]
    fn test_from_words_sorts_by_scalar_value() {
        let dict = thai_dict();
        assert_eq!(dict.word(0).as_deref(), Some("คำ"));
        assert_eq!(dict.word(1).as_deref(), Some("ตัด"));
        assert_eq!(dict.word(2).as_deref(), Some("ตัดคำ"));
        assert_eq!(dict.word(3).as_deref(), Some("ไหม"));
        assert!(dict.validate().is_ok());
    }

    #[test]
    fn test_from_words_dedups() {
        let dict = Dictionary::from_words(["b", "a", "b"]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_parse_final_newline_adds_no_entry() {
        let dict = Dictionary::parse("a\nab\nb\n");
        assert_eq!(dict.len(), 3);
        assert!(dict.validate().is_ok());
    }

    #[test]
    fn test_parse_keeps_empty_lines() {
        let dict = Dictionary::parse("\n\na\n");
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(0), Some(&[][..]));
        assert!(dict.validate().is_ok());
    }

    #[test]
    fn test_parse_strips_carriage_return() {
        let dict = Dictionary::parse("a\r\nb");
        assert!(dict.contains("a"));
        assert!(dict.contains("b"));
    }

    #[test]
    fn test_validate_reports_first_unsorted_index() {
        let dict = Dictionary::from_sorted_words(["a", "c", "b", "d"]);
        assert_eq!(
            dict.validate(),
            Err(CoreError::UnsortedDictionary { index: 2 })
        );
    }

    #[test]
    fn test_validate_accepts_empty_entry_first() {
        let dict = Dictionary::parse("\na\nb");
        assert!(dict.validate().is_ok());
    }

    #[test]
    fn test_seek_left_and_right_bounds() {
        let dict = Dictionary::from_sorted_words(["a", "ba", "bb", "bc", "c"]);
        let last = dict.len() - 1;
        assert_eq!(seek(Direction::Left, &dict, 0, last, 0, 'b'), Some(1));
        assert_eq!(seek(Direction::Right, &dict, 0, last, 0, 'b'), Some(3));
        assert_eq!(seek(Direction::Left, &dict, 0, last, 0, 'z'), None);
    }

    #[test]
    fn test_seek_skips_short_entries() {
        let dict = Dictionary::from_sorted_words(["b", "ba", "bb"]);
        assert_eq!(seek(Direction::Left, &dict, 0, 2, 1, 'a'), Some(1));
        assert_eq!(seek(Direction::Right, &dict, 0, 2, 1, 'b'), Some(2));
        assert_eq!(seek(Direction::Left, &dict, 0, 0, 1, 'a'), None);
    }

    #[test]
    fn test_seek_empty_dictionary() {
        let dict = Dictionary::default();
        assert_eq!(seek(Direction::Left, &dict, 0, 0, 0, 'a'), None);
    }

    #[test]
    fn test_seek_empty_string_entry_never_matches() {
        let dict = Dictionary::from_sorted_words([""]);
        assert_eq!(dict.len(), 1);
        assert_eq!(seek(Direction::Left, &dict, 0, 0, 0, 'a'), None);
    }

    #[test]
    fn test_max_word_len_counts_chars() {
        assert_eq!(thai_dict().max_word_len(), 5);
        assert_eq!(Dictionary::default().max_word_len(), 0);
    }
}
