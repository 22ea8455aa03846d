//! Assorted small helpers shared by the algorithms and their tests.

/// Check whether a symbol slice reads the same forward and backward.
///
/// Used as the ground-truth predicate in the property suites; empty and
/// single-symbol slices are trivially palindromic.
#[inline]
pub fn is_palindrome<T: PartialEq>(s: &[T]) -> bool {
    let n = s.len();
    (0..n / 2).all(|i| s[i] == s[n - 1 - i])
}
