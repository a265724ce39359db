//! Property tests for the chained suspect table.

use std::collections::HashMap;

use proptest::prelude::*;

use detective_quest::SuspectLookup;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Lookup agrees with a map where later registrations win.
    #[test]
    fn property_lookup_matches_last_registration(
        entries in proptest::collection::vec(("[a-f]{1,3}", "[A-Z][a-z]{1,5}"), 0..40),
        probes in proptest::collection::vec("[a-g]{1,3}", 0..20),
        buckets in 1usize..32,
    ) {
        let mut lookup = SuspectLookup::with_buckets(buckets).unwrap();
        let mut model = HashMap::new();
        for (clue, suspect) in &entries {
            lookup.register(clue.clone(), suspect.clone());
            model.insert(clue.clone(), suspect.clone());
        }

        prop_assert_eq!(lookup.len(), entries.len());
        for clue in entries.iter().map(|(c, _)| c).chain(probes.iter()) {
            prop_assert_eq!(lookup.lookup(clue), model.get(clue).map(String::as_str));
        }
    }

    /// PROPERTY: Lookup is case-sensitive.
    #[test]
    fn property_lookup_is_case_sensitive(clue in "[a-z]{1,8}") {
        let mut lookup = SuspectLookup::new();
        lookup.register(clue.clone(), "Ana");
        prop_assert_eq!(lookup.lookup(&clue), Some("Ana"));
        prop_assert_eq!(lookup.lookup(&clue.to_ascii_uppercase()), None);
    }

    /// PROPERTY: Bucket choice is stable and in range.
    #[test]
    fn property_bucket_is_stable(clue in ".{0,20}", buckets in 1usize..64) {
        let lookup = SuspectLookup::with_buckets(buckets).unwrap();
        let bucket = lookup.bucket_of(&clue);
        prop_assert!(bucket < buckets);
        prop_assert_eq!(bucket, lookup.bucket_of(&clue));
    }
}
