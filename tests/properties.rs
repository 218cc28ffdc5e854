mod common;

use common::*;
use proptest::prelude::*;
use textindex::{
    SuffixArrayConstruction, build_lcp, build_suffix_array, build_z_array,
    longest_repeated_substring, search_pattern,
};

// small alphabets, so that long repeats are common
fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(b'a'..b'e', 0..64)
}

fn text_and_pattern_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (
        prop::collection::vec(b'a'..b'c', 1..80),
        prop::collection::vec(b'a'..b'c', 1..5),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn suffix_array_is_sorted_permutation(text in text_strategy()) {
        let suffix_array = build_suffix_array(&text);

        prop_assert!(is_suffix_array(&text, &suffix_array));
        prop_assert_eq!(suffix_array, naive_suffix_array(&text));
    }

    #[test]
    fn builder_agrees_with_free_function(text in text_strategy()) {
        let res = SuffixArrayConstruction::for_text(text.as_slice())
            .in_owned_buffer32()
            .run()
            .unwrap();

        let widened: Vec<usize> = res.suffix_array().iter().map(|&v| v as usize).collect();
        prop_assert_eq!(widened, build_suffix_array(&text));
    }

    #[test]
    fn lcp_matches_direct_comparison(text in text_strategy()) {
        let suffix_array = build_suffix_array(&text);
        let lcp = build_lcp(&text, &suffix_array).unwrap();

        prop_assert_eq!(lcp.len(), text.len().saturating_sub(1));
        prop_assert!(is_lcp(&text, &suffix_array, &lcp));
    }

    #[test]
    fn z_array_matches_naive(text in text_strategy()) {
        let z_array = build_z_array(&text);

        if !text.is_empty() {
            prop_assert_eq!(z_array[0], text.len());
        }
        for (i, &value) in z_array.iter().enumerate() {
            prop_assert!(value <= text.len() - i);
        }
        prop_assert_eq!(z_array, naive_z_array(&text));
    }

    #[test]
    fn search_matches_naive((text, pattern) in text_and_pattern_strategy()) {
        prop_assume!(pattern.len() <= text.len());

        let matches: Vec<_> = search_pattern(&text, &pattern).unwrap().collect();

        prop_assert_eq!(matches, naive_occurrences(&text, &pattern));
    }

    #[test]
    fn longest_repeat_is_repeated_and_maximal(text in text_strategy()) {
        match longest_repeated_substring(&text) {
            Some(range) => {
                let repeat = &text[range.clone()];
                prop_assert!(occurs_at_least_twice(&text, repeat));

                // nothing one symbol longer repeats
                let longer = range.len() + 1;
                let has_longer_repeat = (0..text.len().saturating_sub(longer - 1))
                    .any(|start| occurs_at_least_twice(&text, &text[start..start + longer]));
                prop_assert!(!has_longer_repeat);
            }
            None => {
                let mut distinct = text.clone();
                distinct.sort_unstable();
                distinct.dedup();

                prop_assert_eq!(distinct.len(), text.len());
            }
        }
    }
}
