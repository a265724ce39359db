//! Property tests for the case-insensitive clue index.

use proptest::prelude::*;

use detective_quest::domain::entities::compare_clues;
use detective_quest::ClueIndex;

fn clue() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 :]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Listing is sorted case-insensitively with no equal neighbours.
    #[test]
    fn property_listing_is_strictly_sorted(clues in proptest::collection::vec(clue(), 0..40)) {
        let index: ClueIndex = clues.iter().map(String::as_str).collect();
        let listed = index.list_in_order();

        for pair in listed.windows(2) {
            prop_assert_eq!(compare_clues(pair[0], pair[1]), std::cmp::Ordering::Less);
        }
        prop_assert_eq!(listed.len(), index.len());
    }

    /// PROPERTY: Every permutation of the same clues lists identically.
    #[test]
    fn property_insertion_order_does_not_matter(
        clues in proptest::collection::vec(clue(), 0..24).prop_shuffle()
    ) {
        let mut sorted = clues.clone();
        sorted.sort();
        // Compare case-folded: which casing survives depends on insertion order.
        let lower = |v: &[String]| -> Vec<String> {
            let index: ClueIndex = v.iter().map(String::as_str).collect();
            index.iter().map(|c| c.to_ascii_lowercase()).collect()
        };
        prop_assert_eq!(lower(&clues), lower(&sorted));
    }

    /// PROPERTY: Inserting again is a no-op and the first casing is kept.
    #[test]
    fn property_insert_is_idempotent(text in "[a-z]{1,10}") {
        let mut index = ClueIndex::new();
        let upper = text.to_ascii_uppercase();
        prop_assert!(index.insert(&upper));
        prop_assert!(!index.insert(&text));
        prop_assert!(!index.insert(&upper));
        prop_assert_eq!(index.len(), 1);
        prop_assert_eq!(index.list_in_order(), vec![upper.as_str()]);
    }

    /// PROPERTY: Empty text never enters the index.
    #[test]
    fn property_empty_text_is_ignored(clues in proptest::collection::vec(clue(), 0..16)) {
        let index: ClueIndex = clues.iter().map(String::as_str).collect();
        prop_assert!(index.iter().all(|c| !c.is_empty()));
    }

    /// PROPERTY: Release visits every node exactly once.
    #[test]
    fn property_release_counts_every_node(clues in proptest::collection::vec(clue(), 0..40)) {
        let index: ClueIndex = clues.iter().map(String::as_str).collect();
        let len = index.len();
        prop_assert_eq!(index.release(), len);
    }
}
