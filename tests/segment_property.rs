use palseg::{can_segment, segmentation, Dictionary};
use proptest::prelude::*;
use std::collections::HashSet;

/// Position-driven oracle: `dp[j]` via every split point, with the words
/// held in a hash set. Deliberately a different formulation from the
/// word-driven DP under test.
fn naive_can(s: &str, dict: &Dictionary) -> bool {
    let set: HashSet<&str> = dict.words().iter().map(|w| w.as_str()).collect();
    let n = s.len();
    let mut dp = vec![false; n + 1];
    dp[0] = true;
    for j in 1..=n {
        dp[j] = (0..j).any(|i| dp[i] && set.contains(&s[i..j]));
    }
    dp[n]
}

fn small_dict() -> impl Strategy<Value = Dictionary> {
    prop::collection::vec("[a-b]{1,3}", 0..6)
        .prop_map(|words| Dictionary::new(words).expect("words are non-empty"))
}

proptest! {
    #[test]
    fn matches_naive(s in "[a-b]{0,16}", dict in small_dict()) {
        prop_assert_eq!(can_segment(&s, &dict), naive_can(&s, &dict));
    }

    #[test]
    fn concatenation_of_dict_words_segments(
        dict in prop::collection::vec("[a-c]{1,4}", 1..5),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let d = Dictionary::new(dict.iter().cloned()).expect("non-empty words");
        let s: String = picks.iter().map(|ix| ix.get(&dict).as_str()).collect();
        prop_assert!(can_segment(&s, &d));
    }

    #[test]
    fn reconstruction_agrees_and_covers(s in "[a-b]{0,16}", dict in small_dict()) {
        let feasible = can_segment(&s, &dict);
        match segmentation(&s, &dict) {
            Some(parts) => {
                prop_assert!(feasible);
                prop_assert_eq!(parts.concat(), s.clone());
                for part in parts {
                    prop_assert!(dict.words().iter().any(|w| w == part));
                }
            }
            None => prop_assert!(!feasible),
        }
    }

    #[test]
    fn single_word_dictionary(s in "[a-b]{0,12}", w in "[a-b]{1,3}") {
        let d = Dictionary::new([w.clone()]).expect("non-empty word");
        // Feasible iff s is w repeated a whole number of times.
        let expected = s.len() % w.len() == 0
            && s.as_bytes().chunks(w.len()).all(|c| c == w.as_bytes());
        prop_assert_eq!(can_segment(&s, &d), expected);
    }
}

#[test]
fn empty_dictionary_edge_cases() {
    let empty = Dictionary::default();
    assert!(can_segment("", &empty));
    assert!(!can_segment("x", &empty));
}
