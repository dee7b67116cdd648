//! Binary search and bound queries over ascending slices.
//!
//! Every function assumes `seq` is sorted ascending and never checks it; an
//! unsorted slice yields an unspecified but in-range answer. Midpoints are
//! computed as `lo + (hi - lo) / 2` and the loops are iterative.

use std::ops::Range;

/// Returns the index of some element equal to `target`, or `None`.
///
/// When `target` occurs more than once, which of its indices is returned is
/// unspecified.
///
/// # Examples
/// ```
/// use classics_core::binary_search;
///
/// let seq = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
/// assert_eq!(binary_search(&seq, &7), Some(3));
/// assert_eq!(binary_search(&seq, &4), None);
/// ```
#[must_use]
pub fn binary_search<T: PartialOrd>(seq: &[T], target: &T) -> Option<usize> {
    // Half-open [lo, hi) so shrinking past index zero cannot underflow.
    let mut lo = 0;
    let mut hi = seq.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let value = &seq[mid];
        if value == target {
            return Some(mid);
        }
        if value < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    None
}

/// Returns the first index whose element is `>= target`, or `seq.len()`.
///
/// # Examples
/// ```
/// use classics_core::lower_bound;
///
/// assert_eq!(lower_bound(&[1, 2, 2, 2, 5], &2), 1);
/// assert_eq!(lower_bound(&[1, 2, 2, 2, 5], &6), 5);
/// ```
#[must_use]
pub fn lower_bound<T: PartialOrd>(seq: &[T], target: &T) -> usize {
    partition_point(seq, |value| value < target)
}

/// Returns the first index whose element is `> target`, or `seq.len()`.
///
/// # Examples
/// ```
/// use classics_core::upper_bound;
///
/// assert_eq!(upper_bound(&[1, 2, 2, 2, 5], &2), 4);
/// assert_eq!(upper_bound(&[1, 2, 2, 2, 5], &0), 0);
/// ```
#[must_use]
pub fn upper_bound<T: PartialOrd>(seq: &[T], target: &T) -> usize {
    partition_point(seq, |value| value <= target)
}

/// Returns the index range holding every element equal to `target`.
///
/// The range is empty exactly when `target` is absent; its length is the
/// number of occurrences.
///
/// # Examples
/// ```
/// use classics_core::equal_range;
///
/// assert_eq!(equal_range(&[1, 2, 2, 2, 5], &2), 1..4);
/// assert!(equal_range(&[1, 2, 2, 2, 5], &3).is_empty());
/// ```
#[must_use]
pub fn equal_range<T: PartialOrd>(seq: &[T], target: &T) -> Range<usize> {
    lower_bound(seq, target)..upper_bound(seq, target)
}

/// Half-open search for the first index where `before` stops holding.
fn partition_point<T>(seq: &[T], mut before: impl FnMut(&T) -> bool) -> usize {
    let mut lo = 0;
    let mut hi = seq.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if before(&seq[mid]) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rstest::rstest;

    use crate::test_utils::suite_proptest_config;

    const ODDS: [i64; 10] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

    #[rstest]
    #[case(7, Some(3), 3, 4)]
    #[case(1, Some(0), 0, 1)]
    #[case(19, Some(9), 9, 10)]
    #[case(4, None, 2, 2)]
    #[case(0, None, 0, 0)]
    #[case(20, None, 10, 10)]
    fn odd_numbers(
        #[case] target: i64,
        #[case] index: Option<usize>,
        #[case] lower: usize,
        #[case] upper: usize,
    ) {
        assert_eq!(binary_search(&ODDS, &target), index);
        assert_eq!(lower_bound(&ODDS, &target), lower);
        assert_eq!(upper_bound(&ODDS, &target), upper);
    }

    #[test]
    fn empty_slice_has_no_matches() {
        let empty: [i64; 0] = [];
        assert_eq!(binary_search(&empty, &1), None);
        assert_eq!(lower_bound(&empty, &1), 0);
        assert_eq!(upper_bound(&empty, &1), 0);
        assert_eq!(equal_range(&empty, &1), 0..0);
    }

    #[test]
    fn duplicates_return_an_index_inside_the_run() {
        let seq = [2, 2, 2, 2, 3, 3, 9];
        let index = binary_search(&seq, &2).expect("2 is present");
        assert!(equal_range(&seq, &2).contains(&index));
        assert_eq!(equal_range(&seq, &3), 4..6);
    }

    #[test]
    fn works_with_floats() {
        let seq = [0.5, 1.5, 1.5, 4.0];
        assert_eq!(binary_search(&seq, &4.0), Some(3));
        assert_eq!(equal_range(&seq, &1.5), 1..3);
        assert_eq!(binary_search(&seq, &f64::NAN), None);
    }

    fn sorted_with_target() -> impl Strategy<Value = (Vec<i32>, i32)> {
        (prop::collection::vec(-20i32..20, 0..64), -25i32..25).prop_map(|(mut seq, target)| {
            seq.sort_unstable();
            (seq, target)
        })
    }

    proptest! {
        #![proptest_config(suite_proptest_config(256))]

        #[test]
        fn bounds_agree_with_linear_scan((seq, target) in sorted_with_target()) {
            let lower = lower_bound(&seq, &target);
            let upper = upper_bound(&seq, &target);
            let count = seq.iter().filter(|&&value| value == target).count();

            prop_assert_eq!(lower, seq.iter().take_while(|&&value| value < target).count());
            prop_assert_eq!(upper - lower, count);
            prop_assert_eq!(lower == upper, count == 0);

            match binary_search(&seq, &target) {
                Some(index) => prop_assert_eq!(seq[index], target),
                None => prop_assert_eq!(count, 0),
            }
        }
    }
}
