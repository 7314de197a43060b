//! Property-based tests for location keys and the search history
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{Duration, TimeZone, Utc};
use domain::{HistoryEntry, LocationKey, SearchHistory, normalize};
use proptest::prelude::*;

/// Location-like text: mixed-case letters, accents, spaces and punctuation
fn location_text() -> impl Strategy<Value = String> {
    "[a-zA-Zàâçéèêëîïôûùüÿñæœ' .-]{0,40}"
}

/// Any printable text, including letters whose capitals expand (`ß`, `ﬁ`, `ŉ`)
fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,40}",
        "[ a-zßẞﬁﬂŉΐΣσςİı]{0,20}",
    ]
}

// ============================================================================
// Normalization Property Tests
// ============================================================================

mod normalize_tests {
    use super::*;

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in location_text()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_is_idempotent_for_any_text(s in any_text()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn from_normalized_matches_parse(s in any_text()) {
            prop_assert_eq!(LocationKey::from_normalized(&s).ok(), LocationKey::parse(&s));
        }

        #[test]
        fn normalize_ignores_input_casing(s in location_text()) {
            prop_assert_eq!(normalize(&s.to_uppercase()), normalize(&s.to_lowercase()));
        }

        #[test]
        fn normalize_preserves_word_count(s in any_text()) {
            prop_assert_eq!(normalize(&s).split(' ').count(), s.split(' ').count());
        }

        #[test]
        fn parse_never_yields_blank_key(s in location_text()) {
            if let Some(key) = LocationKey::parse(&s) {
                prop_assert!(!key.as_str().trim().is_empty());
                prop_assert_eq!(key.as_str(), key.as_str().trim());
            } else {
                prop_assert!(s.trim().is_empty());
            }
        }

        #[test]
        fn from_normalized_accepts_parsed_keys(s in location_text()) {
            if let Some(key) = LocationKey::parse(&s) {
                let again = LocationKey::from_normalized(key.as_str()).unwrap();
                prop_assert_eq!(again, key);
            }
        }
    }
}

// ============================================================================
// SearchHistory Property Tests
// ============================================================================

mod search_history_tests {
    use super::*;

    proptest! {
        #[test]
        fn repeated_appends_keep_one_entry_with_first_timestamp(
            name in "[a-z]{1,12}",
            repeats in 1usize..20
        ) {
            let key = LocationKey::parse(&name).unwrap();
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let mut history = SearchHistory::new();

            for i in 0..repeats {
                let offset = Duration::minutes(i64::try_from(i).unwrap());
                history.append(HistoryEntry::new(key.clone(), "XX", start + offset));
            }

            prop_assert_eq!(history.len(), 1);
            prop_assert_eq!(history.get(&key).unwrap().searched_at, start);
        }

        #[test]
        fn keys_are_unique(names in prop::collection::vec("[a-zA-Z]{1,6}", 0..30)) {
            let now = Utc::now();
            let mut history = SearchHistory::new();
            for name in &names {
                history.append(HistoryEntry::new(LocationKey::parse(name).unwrap(), "XX", now));
            }

            let mut keys: Vec<_> = history.keys().cloned().collect();
            let total = keys.len();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), total);
        }

        #[test]
        fn removal_preserves_relative_order(
            names in prop::collection::vec("[a-z]{1,6}", 1..15),
            pick in any::<prop::sample::Index>()
        ) {
            let now = Utc::now();
            let mut history = SearchHistory::new();
            for name in &names {
                history.append(HistoryEntry::new(LocationKey::parse(name).unwrap(), "XX", now));
            }

            let before: Vec<_> = history.keys().cloned().collect();
            let victim = before[pick.index(before.len())].clone();
            history.remove(&victim);

            let expected: Vec<_> = before.into_iter().filter(|k| k != &victim).collect();
            let after: Vec<_> = history.keys().cloned().collect();
            prop_assert_eq!(after, expected);
            prop_assert!(!history.contains(&victim));
        }
    }
}
