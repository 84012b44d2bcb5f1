#![deny(unsafe_op_in_unsafe_fn)]

//! An adaptive, stable, comparison-based TimSort.
//!
//! The input is first cut into sorted blocks: natural runs are detected (and
//! reversed if strictly descending) and short runs are padded to a minimum run
//! length using binary insertion sort. The blocks are then merged pairwise
//! following a balance rule on a stack of pending runs, using a merge that
//! switches to binary-search driven block copies ("galloping") once one side
//! keeps winning. Sorted, reverse sorted and nearly sorted input take close to
//! linear time. No O(n log n) bound is guaranteed on arbitrary input: the
//! balance rule lets the top pending run absorb the blocks after it one at a
//! time.
//!
//! The comparison must be a total order. If it is not, the result is some
//! unspecified permutation of the input, but never undefined behavior. If it
//! panics, the slice is left as some permutation of its input.

// Slices shorter than this form a single run. Longer slices use a minimum run
// length between MIN_MERGE / 2 and MIN_MERGE.
const MIN_MERGE: usize = 64;

// Once one side of a merge has won this many comparisons in a row we switch
// to binary searching for the end of its winning streak.
const MIN_GALLOP: isize = 7;

// We always need the tracking module internally to provide a fallback dummy
// implementation to prevent adding conditional compilation everywhere.
#[cfg(not(feature = "tracking"))]
mod tracking;
#[cfg(feature = "tracking")]
pub mod tracking;

mod binary_search;
mod gallop_merge;
mod insertion_sort;
mod minrun;
mod runs;
mod timsort;
mod util;

use core::cmp::Ordering;

use util::*;

/// Sorts the slice in place and returns it. This sort is stable.
///
/// ```
/// let mut v = [5, 1, 4, 2, 3];
/// assert_eq!(timsort::sort(&mut v), &[1, 2, 3, 4, 5]);
/// ```
pub fn sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    sort_by(v, |a, b| a.cmp(b))
}

/// Sorts the slice in place with a key extraction function and returns it.
/// This sort is stable.
pub fn sort_by_key<T, F: FnMut(&T) -> K, K: Ord>(v: &mut [T], mut f: F) -> &mut [T] {
    sort_by(v, |a, b| f(a).cmp(&f(b)))
}

/// Sorts the slice in place with a comparison function and returns it. This
/// sort is stable.
///
/// See [`slice::sort_by`] for the requirements on `compare`.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Zero-sized types are either always or never sorted, as they can not carry
    // any information that would allow the permutation to change.
    if core::mem::size_of::<T>() == 0 {
        return v;
    }

    let mut is_less = cmp_from_closure(|a, b| {
        tracking::register_cmp(a, b);
        compare(a, b) == Ordering::Less
    });

    timsort::timsort(v, &mut is_less);
    v
}
