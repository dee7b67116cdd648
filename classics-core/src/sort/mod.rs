//! Stable merge sort in copying and in-place forms.
//!
//! Both variants halve recursively and merge by taking the left run's front
//! unless the right run's front is strictly smaller, which keeps equal
//! elements in input order. Values that do not compare (such as `NaN`) are
//! never "strictly smaller" and therefore also keep their relative position.
//! Recursion depth is `O(log n)`.

use tracing::instrument;

/// Returns a sorted copy of `seq`, leaving the input untouched.
///
/// # Examples
/// ```
/// use classics_core::merge_sort;
///
/// let input = [5, 2, 8, 1, 9, 3];
/// assert_eq!(merge_sort(&input), vec![1, 2, 3, 5, 8, 9]);
/// assert_eq!(input, [5, 2, 8, 1, 9, 3]);
/// ```
#[must_use]
#[instrument(name = "sort.merge_sort", level = "debug", skip(seq), fields(len = seq.len()))]
pub fn merge_sort<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    sorted_copy(seq)
}

/// Sorts `seq` in place and returns it for chaining.
///
/// A single auxiliary buffer the size of `seq` is allocated up front and
/// reused by every merge step.
///
/// # Examples
/// ```
/// use classics_core::merge_sort_in_place;
///
/// let mut values = vec![3, 1, 2];
/// let sorted = merge_sort_in_place(&mut values);
/// assert_eq!(sorted, &[1, 2, 3]);
/// ```
#[instrument(
    name = "sort.merge_sort_in_place",
    level = "debug",
    skip(seq),
    fields(len = seq.len())
)]
pub fn merge_sort_in_place<T: PartialOrd + Clone>(seq: &mut [T]) -> &mut [T] {
    if seq.len() > 1 {
        let mut aux = seq.to_vec();
        sort_range(seq, &mut aux, 0, seq.len());
    }
    seq
}

fn takes_right<T: PartialOrd>(left: &T, right: &T) -> bool {
    right < left
}

fn sorted_copy<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    if seq.len() <= 1 {
        return seq.to_vec();
    }
    let (left, right) = seq.split_at(seq.len() / 2);
    merge(sorted_copy(left), sorted_copy(right))
}

fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let from_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => takes_right(l, r),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if from_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}

/// Sorts the half-open range `lo..hi` of `seq`.
fn sort_range<T: PartialOrd + Clone>(seq: &mut [T], aux: &mut [T], lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(seq, aux, lo, mid);
    sort_range(seq, aux, mid, hi);
    merge_range(seq, aux, lo, mid, hi);
}

/// Merges the sorted runs `lo..mid` and `mid..hi` through `aux`.
fn merge_range<T: PartialOrd + Clone>(
    seq: &mut [T],
    aux: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
) {
    aux[lo..hi].clone_from_slice(&seq[lo..hi]);

    let (mut i, mut j) = (lo, mid);
    for slot in &mut seq[lo..hi] {
        let from_left = i < mid && (j >= hi || !takes_right(&aux[i], &aux[j]));
        if from_left {
            slot.clone_from(&aux[i]);
            i += 1;
        } else {
            slot.clone_from(&aux[j]);
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests;
