use crate::binary_search::{lower_bound, upper_bound};
use crate::tracking::{self, ptr};
use crate::util::*;
use crate::MIN_GALLOP;

/// Stably merges the sorted runs v[..mid] and v[mid..].
///
/// The merge is written into a scratch buffer of v.len() elements and copied
/// back at the end. Elements are only copied, never moved out of v, until that
/// final copy, so should is_less panic v still holds its original contents.
///
/// While merging we track how many comparisons in a row one side has won.
/// Once that reaches MIN_GALLOP we stop comparing element by element and
/// binary search the winning run for the end of the block that precedes the
/// head of the other run, copying the whole block at once.
///
/// Panics if is_less does, aborts if mid > v.len().
pub fn gallop_merge<T, F: Cmp<T>>(v: &mut [T], mid: usize, is_less: &mut F) {
    let n = v.len();
    assert_abort(mid <= n);
    if mid == 0 || mid == n {
        return;
    }

    let mut scratch: Vec<T> = Vec::with_capacity(n);
    let dst = scratch.spare_capacity_mut().as_mut_ptr().cast::<T>();
    let _scratch = tracking::BufferGuard::register("scratch", dst, n);

    let src = v.as_ptr();
    let mut left = 0;
    let mut right = mid;
    let mut out = 0;
    // Positive while the left run keeps winning, negative for the right run.
    let mut count: isize = 0;

    while left < mid && right < n {
        if count >= MIN_GALLOP {
            // Everything in the left run not greater than the right head goes first.
            let block = upper_bound(&v[left..mid], &v[right], is_less);
            unsafe {
                // SAFETY: left + block <= mid and out + block <= n, as out
                // always equals the number of elements consumed so far.
                ptr::copy_nonoverlapping(src.add(left), dst.add(out), block);
            }
            left += block;
            out += block;
            count = 0;
            continue;
        }

        if count <= -MIN_GALLOP {
            // Only right elements strictly less than the left head may precede it.
            let block = lower_bound(&v[right..], &v[left], is_less);
            unsafe {
                // SAFETY: see above.
                ptr::copy_nonoverlapping(src.add(right), dst.add(out), block);
            }
            right += block;
            out += block;
            count = 0;
            continue;
        }

        // Ties go to the left run, which came first in the input.
        if is_less(&v[right], &v[left]) {
            unsafe {
                ptr::copy_nonoverlapping(src.add(right), dst.add(out), 1);
            }
            right += 1;
            count = if count < 0 { count - 1 } else { -1 };
        } else {
            unsafe {
                ptr::copy_nonoverlapping(src.add(left), dst.add(out), 1);
            }
            left += 1;
            count = if count > 0 { count + 1 } else { 1 };
        }
        out += 1;
    }

    unsafe {
        // SAFETY: at most one of these copies is non-empty, and together with
        // what was merged so far they fill exactly n elements of scratch.
        ptr::copy_nonoverlapping(src.add(left), dst.add(out), mid - left);
        out += mid - left;
        ptr::copy_nonoverlapping(src.add(right), dst.add(out), n - right);

        // SAFETY: scratch now holds a permutation of v, every element exactly
        // once. Copying it back transfers ownership, and scratch is dropped
        // with length zero so nothing is dropped twice.
        ptr::copy_nonoverlapping(dst, v.as_mut_ptr(), n);
    }
}
