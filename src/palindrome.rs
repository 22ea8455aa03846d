//! Longest palindromic substring via center expansion.
//!
//! Every palindrome has a center: either a single position (odd length) or
//! the gap between two adjacent positions (even length). A string of `n`
//! symbols has `2n - 1` such centers; expanding outward from each while the
//! flanking symbols match finds the longest palindrome anchored there.
//! Taking the maximum over all centers gives the global answer in O(n²)
//! time and O(1) extra space.
//!
//! The core scan ([`longest_span`]) is generic over any `&[T: PartialEq]`,
//! so it works on bytes, chars, or arbitrary symbol slices; the string
//! front-end ([`longest_palindrome`]) maps the result back to a `&str`
//! slice of the input.

/// A half-open region `start..start + len` of an input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first symbol.
    pub start: usize,
    /// Number of symbols covered.
    pub len: usize,
}

impl Span {
    /// The empty span at the origin.
    pub const EMPTY: Span = Span { start: 0, len: 0 };

    /// The region as an index range, suitable for slicing.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }

    /// Returns true if the span covers no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Longest palindromic region of a symbol slice.
///
/// Ties between equal-length palindromes resolve to the smallest start
/// offset. For non-empty input the result has `len >= 1` (every single
/// symbol is trivially a palindrome); for empty input it is [`Span::EMPTY`].
///
/// ```
/// use palseg::palindrome::longest_span;
///
/// let span = longest_span(b"cbbd");
/// assert_eq!((span.start, span.len), (1, 2)); // "bb"
/// ```
pub fn longest_span<T: PartialEq>(s: &[T]) -> Span {
    #[cfg(feature = "tracing")]
    let scan_span = tracing::trace_span!("palindrome_scan", centers = s.len());
    #[cfg(feature = "tracing")]
    let _enter = scan_span.enter();

    let mut best = Span::EMPTY;
    for center in 0..s.len() {
        let cand = widest_at(s, center);
        if cand.len > best.len {
            best = cand;
        }
    }
    best
}

/// Longest palindromic region, scanning centers on a rayon pool.
///
/// Centers are independent, so the scan parallelizes trivially; the
/// reduction prefers longer spans and breaks length ties toward the
/// smaller start, which is exactly the serial left-to-right rule.
#[cfg(feature = "parallel")]
pub fn longest_span_parallel<T: PartialEq + Sync>(s: &[T]) -> Span {
    use rayon::prelude::*;

    (0..s.len())
        .into_par_iter()
        .map(|center| widest_at(s, center))
        .reduce(
            || Span::EMPTY,
            |a, b| {
                if b.len > a.len || (b.len == a.len && b.start < a.start) {
                    b
                } else {
                    a
                }
            },
        )
}

/// Longest palindromic substring of `s`.
///
/// Returns a slice of the input. Leftmost-starting on length ties; empty
/// only for empty input.
///
/// ```
/// use palseg::longest_palindrome;
///
/// assert_eq!(longest_palindrome("babad"), "bab"); // not "aba": leftmost wins
/// assert_eq!(longest_palindrome("ac"), "a");
/// assert_eq!(longest_palindrome(""), "");
/// ```
pub fn longest_palindrome(s: &str) -> &str {
    if s.is_ascii() {
        // Byte offsets are char offsets; scan bytes directly, no allocation.
        let span = longest_span(s.as_bytes());
        return &s[span.range()];
    }

    // Multi-byte chars: scan over decoded chars, then map the char-indexed
    // span back to byte offsets of the original string.
    let indexed: Vec<(usize, char)> = s.char_indices().collect();
    let symbols: Vec<char> = indexed.iter().map(|&(_, c)| c).collect();
    let span = longest_span(&symbols);
    if span.is_empty() {
        return &s[..0];
    }
    let start = indexed[span.start].0;
    let end = indexed
        .get(span.start + span.len)
        .map_or(s.len(), |&(offset, _)| offset);
    &s[start..end]
}

/// Widest palindrome anchored at `center`: the longer of the odd-length
/// expansion around `center` and the even-length expansion around the gap
/// `(center, center + 1)`.
fn widest_at<T: PartialEq>(s: &[T], center: usize) -> Span {
    let len = expand(s, center, center).max(expand(s, center, center + 1));
    if len == 0 {
        Span::EMPTY
    } else {
        Span {
            start: center - (len - 1) / 2,
            len,
        }
    }
}

/// Length of the widest palindrome whose innermost pair is `(l, r)`.
///
/// Returns 0 when the seed pair itself is out of bounds or mismatched
/// (only possible for even seeds, where `l != r`).
fn expand<T: PartialEq>(s: &[T], mut l: usize, mut r: usize) -> usize {
    if r >= s.len() || s[l] != s[r] {
        return 0;
    }
    while l > 0 && r + 1 < s.len() && s[l - 1] == s[r + 1] {
        l -= 1;
        r += 1;
    }
    r - l + 1
}
