#![cfg(feature = "parallel")]

use palseg::{longest_span, longest_span_parallel, Span};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parallel_scan_matches_serial(s in "[a-c0-1]{0,64}") {
        let bytes = s.as_bytes();
        prop_assert_eq!(longest_span_parallel(bytes), longest_span(bytes));
    }

    #[test]
    fn parallel_tie_break_is_leftmost(reps in 1usize..6, pad in "[xy]{0,4}") {
        // Disjoint equal-length palindromes: "abaZcdcWefeQ...". Separators
        // are pairwise distinct so they can never mirror into a longer
        // palindrome of their own (a repeated separator around "cdc" would
        // form "zcdcz" and beat the trios).
        let mut s = String::new();
        let seps = ['z', 'w', 'q', 'v', 'u'];
        for (i, trio) in ["aba", "cdc", "efe", "ghg", "iji"].iter().enumerate() {
            if i >= reps {
                break;
            }
            s.push_str(trio);
            s.push_str(&pad);
            s.push(seps[i]);
        }
        let span = longest_span_parallel(s.as_bytes());
        prop_assert_eq!(span, longest_span(s.as_bytes()));
        if pad.is_empty() {
            prop_assert_eq!(span, Span { start: 0, len: 3 });
        }
    }
}

#[test]
fn empty_and_single_symbol() {
    assert_eq!(longest_span_parallel::<u8>(&[]), Span::EMPTY);
    assert_eq!(longest_span_parallel(b"q"), Span { start: 0, len: 1 });
}
