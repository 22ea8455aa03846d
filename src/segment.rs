//! Word segmentation over a finite dictionary.
//!
//! Given a text and a [`Dictionary`] of permissible words, decide whether
//! the text splits into a sequence of dictionary words with no leftover
//! characters, and recover one such split.
//!
//! The DP runs over prefix lengths: a table entry at length `e` records
//! whether the prefix of `e` bytes is exactly reconstructible from
//! dictionary words, and if so where the word covering position `e - 1`
//! starts. From each reconstructible prefix we try to extend by every
//! dictionary word, clamping the comparison to the remaining suffix so a
//! word longer than what is left can never match out of bounds.

use thiserror::Error;

/// Rejected dictionary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// An empty word would extend a prefix by zero characters, so the DP
    /// could "use" it without consuming input. Rejected at construction.
    #[error("dictionary words must be non-empty")]
    EmptyWord,
}

/// A validated, deduplicated set of permissible words.
///
/// Word order is irrelevant to segmentation results; insertion order is
/// preserved so scans are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from any iterable of words.
    ///
    /// Duplicates are dropped; an empty word is an error.
    ///
    /// ```
    /// use palseg::Dictionary;
    ///
    /// let dict = Dictionary::new(["cat", "sand", "cat"])?;
    /// assert_eq!(dict.len(), 2);
    /// assert!(Dictionary::new(["ok", ""]).is_err());
    /// # Ok::<(), palseg::DictionaryError>(())
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for word in words {
            let word = word.into();
            if word.is_empty() {
                return Err(DictionaryError::EmptyWord);
            }
            if !out.contains(&word) {
                out.push(word);
            }
        }
        Ok(Self { words: out })
    }

    /// The words, in first-insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// True iff `s` is a concatenation of dictionary words.
///
/// The empty text is trivially segmentable (zero words), regardless of the
/// dictionary; a non-empty text against an empty dictionary is not.
///
/// ```
/// use palseg::{can_segment, Dictionary};
///
/// let dict = Dictionary::new(["cats", "dog", "sand", "and", "cat"])?;
/// assert!(can_segment("catsanddog", &dict));
/// assert!(!can_segment("catsandog", &dict));
/// # Ok::<(), palseg::DictionaryError>(())
/// ```
pub fn can_segment(s: &str, dict: &Dictionary) -> bool {
    let bytes = s.as_bytes();
    reach_table(bytes, dict)[bytes.len()].is_some()
}

/// One segmentation of `s` into dictionary words, or `None` if infeasible.
///
/// Returns `Some(vec![])` for empty `s`. When several segmentations exist,
/// the choice among them is deterministic but otherwise unspecified.
/// Agrees with [`can_segment`]: the result is `Some` exactly when that
/// predicate holds.
///
/// ```
/// use palseg::{segmentation, Dictionary};
///
/// let dict = Dictionary::new(["leet", "code"])?;
/// assert_eq!(segmentation("leetcode", &dict), Some(vec!["leet", "code"]));
/// assert_eq!(segmentation("leetcodex", &dict), None);
/// # Ok::<(), palseg::DictionaryError>(())
/// ```
pub fn segmentation<'s>(s: &'s str, dict: &Dictionary) -> Option<Vec<&'s str>> {
    let bytes = s.as_bytes();
    let table = reach_table(bytes, dict);
    table[bytes.len()]?;

    let mut parts = Vec::new();
    let mut end = bytes.len();
    while end > 0 {
        // Every reachable entry records a reachable predecessor, so this
        // walk terminates at 0. Each part equals a dictionary word, hence
        // the byte offsets are char boundaries and the slice cannot panic.
        let start = table[end]?;
        parts.push(&s[start..end]);
        end = start;
    }
    parts.reverse();
    Some(parts)
}

/// Prefix-reachability table: entry `e` is `Some(start)` iff the prefix of
/// `e` bytes splits into dictionary words, with the final word covering
/// `start..e`. Entry 0 is the base case (empty prefix, sentinel start 0).
fn reach_table(s: &[u8], dict: &Dictionary) -> Vec<Option<usize>> {
    let n = s.len();
    let mut table: Vec<Option<usize>> = vec![None; n + 1];
    table[0] = Some(0);

    for i in 0..n {
        if table[i].is_none() {
            continue;
        }
        for word in dict.words() {
            let word = word.as_bytes();
            let end = i + word.len();
            if end <= n && table[end].is_none() && &s[i..end] == word {
                table[end] = Some(i);
            }
        }
    }
    table
}
