//! Example: longest palindromic substring search.
//!
//! Run with:
//! `cargo run --example palindrome`

use palseg::{longest_palindrome, longest_span};

fn main() {
    for s in ["babad", "cbbd", "a", "ac", "forgeeksskeegfor"] {
        let out = longest_palindrome(s);
        let span = longest_span(s.as_bytes());
        println!("{s:>18} -> {out:?} (start {}, len {})", span.start, span.len);
    }
}
