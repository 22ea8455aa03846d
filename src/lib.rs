//! Palindrome search and dictionary word segmentation.
//!
//! This crate provides two independent, pure string-DP routines:
//! - [`longest_palindrome`]: the longest contiguous palindromic substring of a
//!   text, found by center expansion in O(n²) time and O(1) extra space.
//! - [`can_segment`] / [`segmentation`]: whether a text decomposes into a
//!   concatenation of words from a finite [`Dictionary`], and one such
//!   decomposition, via a prefix-length DP.
//!
//! Both routines are referentially transparent: no shared state, no I/O, the
//! same input always yields the same output.
//!
//! ## Quick start
//! ```
//! use palseg::{can_segment, longest_palindrome, Dictionary};
//!
//! assert_eq!(longest_palindrome("babad"), "bab");
//! assert_eq!(longest_palindrome("cbbd"), "bb");
//!
//! let dict = Dictionary::new(["leet", "code"])?;
//! assert!(can_segment("leetcode", &dict));
//! # Ok::<(), palseg::DictionaryError>(())
//! ```
//!
//! ## Tie-breaking
//! When several palindromic substrings share the maximal length, the
//! leftmost-starting one wins. The optional `parallel` feature scans centers
//! on a rayon pool and reproduces the same tie-break.

pub mod palindrome;
pub mod segment;
pub mod utils;

#[cfg(feature = "parallel")]
pub use crate::palindrome::longest_span_parallel;
pub use crate::palindrome::{longest_palindrome, longest_span, Span};
pub use crate::segment::{can_segment, segmentation, Dictionary, DictionaryError};
