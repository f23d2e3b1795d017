//! Property tests for stream sorting.

use lambdava::{functional, SortConfig};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Values that only order against values of the same group
#[derive(Debug, Clone, PartialEq)]
struct Grouped(u8, u16);

impl PartialOrd for Grouped {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.0 == other.0 {
            self.1.partial_cmp(&other.1)
        } else {
            None
        }
    }
}

proptest! {
    #[test]
    fn sort_is_idempotent(items in proptest::collection::vec(any::<i32>(), 0..64)) {
        let once = functional(items.clone()).sort();
        let twice = once.sort();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_matches_std_sort(items in proptest::collection::vec(any::<i16>(), 0..64)) {
        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(functional(items).sort().into_vec(), expected);
    }

    #[test]
    fn sort_by_is_stable(items in proptest::collection::vec((0u8..4, any::<u32>()), 0..64)) {
        let sorted = functional(items.clone()).sort_by(|a, b| a.0.cmp(&b.0)).into_vec();
        for key in 0u8..4 {
            let before: Vec<u32> = items.iter().filter(|x| x.0 == key).map(|x| x.1).collect();
            let after: Vec<u32> = sorted.iter().filter(|x| x.0 == key).map(|x| x.1).collect();
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn sort_leaves_input_unchanged(items in proptest::collection::vec(any::<i32>(), 0..32)) {
        let stream = functional(items.clone());
        let _ = stream.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(stream.into_vec(), items);
    }

    #[test]
    fn permissive_partial_sort_keeps_every_element(
        items in proptest::collection::vec(
            prop_oneof![Just(f64::NAN), -100.0f64..100.0],
            0..32,
        )
    ) {
        let sorted = functional(items.clone())
            .sort_partial_with(&SortConfig::permissive())
            .unwrap()
            .into_vec();
        prop_assert_eq!(sorted.len(), items.len());

        let nan_count = items.iter().filter(|x| x.is_nan()).count();
        let split = sorted.len() - nan_count;
        prop_assert!(sorted[split..].iter().all(|x| x.is_nan()));
        prop_assert!(sorted[..split].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn strict_partial_sort_fails_only_with_nan(
        items in proptest::collection::vec(
            prop_oneof![Just(f64::NAN), -100.0f64..100.0],
            0..32,
        )
    ) {
        let result = functional(items.clone()).sort_partial_with(&SortConfig::strict());
        prop_assert_eq!(result.is_err(), items.iter().any(|x| x.is_nan()));
    }

    #[test]
    fn strict_partial_sort_fails_only_when_groups_mix(
        items in proptest::collection::vec((0u8..2, any::<u16>()), 0..32)
    ) {
        let items: Vec<Grouped> = items.into_iter().map(|(g, n)| Grouped(g, n)).collect();
        let mixed = items.iter().any(|x| x.0 != items[0].0);
        let result = functional(items.clone()).sort_partial_with(&SortConfig::strict());
        prop_assert_eq!(result.is_err(), mixed);
        if let Ok(sorted) = result {
            prop_assert!(sorted.as_slice().windows(2).all(|w| w[0].1 <= w[1].1));
        }
    }
}
