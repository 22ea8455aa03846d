//! Example: word segmentation against a small dictionary.
//!
//! Run with:
//! `cargo run --example segment`

use palseg::{segmentation, Dictionary, DictionaryError};

fn main() -> Result<(), DictionaryError> {
    let dict = Dictionary::new(["cats", "dog", "sand", "and", "cat", "leet", "code"])?;

    for s in ["leetcode", "catsanddog", "catsandog"] {
        match segmentation(s, &dict) {
            Some(parts) => println!("{s:>12} -> {}", parts.join(" + ")),
            None => println!("{s:>12} -> no segmentation"),
        }
    }
    Ok(())
}
