//! Tests for the copying and in-place merge sorts.

use std::cmp::Ordering;

use proptest::prelude::*;
use rstest::rstest;

use crate::test_utils::suite_proptest_config;

use super::{merge_sort, merge_sort_in_place};

/// Orders by `key` only, so `tag` exposes how equal keys were rearranged.
#[derive(Clone, Copy, Debug)]
struct Tagged {
    key: i32,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

fn tagged(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect()
}

fn is_stable(sorted: &[Tagged]) -> bool {
    sorted
        .windows(2)
        .all(|pair| pair[0].key < pair[1].key || (pair[0].key == pair[1].key && pair[0].tag < pair[1].tag))
}

#[rstest]
#[case::sample(vec![5, 2, 8, 1, 9, 3], vec![1, 2, 3, 5, 8, 9])]
#[case::demo(vec![64, 34, 25, 12, 22, 11, 90, 5], vec![5, 11, 12, 22, 25, 34, 64, 90])]
#[case::empty(vec![], vec![])]
#[case::single(vec![42], vec![42])]
#[case::negatives(vec![0, -3, 7, -3, 2], vec![-3, -3, 0, 2, 7])]
#[case::reversed(vec![5, 4, 3, 2, 1], vec![1, 2, 3, 4, 5])]
fn both_variants_sort_ascending(#[case] input: Vec<i64>, #[case] expected: Vec<i64>) {
    let copy = merge_sort(&input);
    assert_eq!(copy, expected);

    let mut storage = input.clone();
    let sorted = merge_sort_in_place(&mut storage);
    assert_eq!(sorted, expected.as_slice());
}

#[test]
fn copying_variant_leaves_input_untouched() {
    let input = vec![3, 1, 2];
    let _sorted = merge_sort(&input);
    assert_eq!(input, vec![3, 1, 2]);
}

#[test]
fn in_place_variant_returns_the_same_storage() {
    let mut storage = vec![9, 7, 8];
    let address = storage.as_ptr();
    let sorted = merge_sort_in_place(&mut storage);
    assert_eq!(sorted.as_ptr(), address);
    sorted[0] = 100;
    assert_eq!(storage, vec![100, 8, 9]);
}

#[test]
fn equal_keys_keep_input_order() {
    let input = tagged(&[3, 1, 3, 2, 1, 3]);
    let copy = merge_sort(&input);
    assert!(is_stable(&copy));

    let mut storage = input;
    assert!(is_stable(merge_sort_in_place(&mut storage)));
}

#[test]
fn sorting_sorted_input_is_idempotent() {
    let once = merge_sort(&[4, 1, 3, 1]);
    assert_eq!(merge_sort(&once), once);
}

#[test]
fn nan_does_not_panic() {
    let input = [2.0, f64::NAN, 1.0];
    assert_eq!(merge_sort(&input).len(), 3);
    let mut storage = input;
    assert_eq!(merge_sort_in_place(&mut storage).len(), 3);
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn matches_std_stable_sort(keys in prop::collection::vec(-8i32..8, 0..120)) {
        let input = tagged(&keys);
        let mut expected = input.clone();
        expected.sort_by_key(|item| item.key);
        let expected_tags: Vec<usize> = expected.iter().map(|item| item.tag).collect();

        let copy = merge_sort(&input);
        prop_assert_eq!(copy.iter().map(|item| item.tag).collect::<Vec<_>>(), expected_tags.clone());

        let mut storage = input;
        let in_place = merge_sort_in_place(&mut storage);
        prop_assert_eq!(in_place.iter().map(|item| item.tag).collect::<Vec<_>>(), expected_tags);
    }
}
