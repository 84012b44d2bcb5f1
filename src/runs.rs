use crate::insertion_sort::binary_insertion_sort;
#[cfg(feature = "tracking")]
use crate::tracking::ptr;
use crate::util::*;

/// Splits v into adjacent sorted blocks of at least min_run elements, except
/// possibly the last one.
///
/// Each block starts with the natural run found at its start (a strictly
/// descending run is reversed first). Natural runs shorter than min_run are
/// padded to min_run elements with binary insertion sort.
pub fn prepare_runs<T, F: Cmp<T>>(v: &mut [T], min_run: usize, is_less: &mut F) {
    let n = v.len();
    let mut start = 0;
    while start < n {
        let rest = &mut v[start..];
        let run_length = natural_run_length(rest, is_less);
        let block_length = run_length.max(min_run).min(rest.len());
        binary_insertion_sort(&mut rest[..block_length], run_length, is_less);
        start += block_length;
    }
}

/// Returns the length of the natural run at the start of v, making it
/// ascending.
///
/// A strictly descending prefix is reversed in place, after which the run is
/// extended for as long as elements are non-descending. The descending part
/// must be strict, otherwise reversing it would reorder equal elements.
pub fn natural_run_length<T, F: Cmp<T>>(v: &mut [T], is_less: &mut F) -> usize {
    let n = v.len();
    if n < 2 {
        return n;
    }

    let mut end = 1;
    while end < n && is_less(&v[end], &v[end - 1]) {
        end += 1;
    }
    if end > 1 {
        reverse_run(&mut v[..end]);
    }

    end + ascending_run_length(&v[end - 1..], is_less) - 1
}

/// Returns the length of the non-descending run at the start of v.
pub fn ascending_run_length<T, F: Cmp<T>>(v: &[T], is_less: &mut F) -> usize {
    let n = v.len();
    if n == 0 {
        return 0;
    }

    let mut end = 1;
    while end < n && !is_less(&v[end], &v[end - 1]) {
        end += 1;
    }
    end
}

/// Reverses v by swapping pairs from the ends inward.
fn reverse_run<T>(v: &mut [T]) {
    #[cfg(feature = "tracking")]
    {
        let n = v.len();
        let base = v.as_mut_ptr();
        for i in 0..n / 2 {
            unsafe {
                // SAFETY: i < n / 2 <= n - 1 - i, both in bounds and distinct.
                ptr::swap_nonoverlapping(base.add(i), base.add(n - 1 - i), 1);
            }
        }
    }
    #[cfg(not(feature = "tracking"))]
    {
        v.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn ascending_prefix() {
        assert_eq!(ascending_run_length::<i32, _>(&[], &mut lt), 0);
        assert_eq!(ascending_run_length(&[4], &mut lt), 1);
        assert_eq!(ascending_run_length(&[1, 2, 2, 5, 3, 9], &mut lt), 4);
        assert_eq!(ascending_run_length(&[3, 2, 1], &mut lt), 1);
    }

    #[test]
    fn descending_prefix_is_reversed() {
        let mut v = [9, 7, 4, 1, 2, 0];
        assert_eq!(natural_run_length(&mut v, &mut lt), 4);
        assert_eq!(v, [1, 4, 7, 9, 2, 0]);

        // The reversed run continues as ascending past its end.
        let mut v = [5, 3, 1, 6, 8, 2];
        assert_eq!(natural_run_length(&mut v, &mut lt), 5);
        assert_eq!(v, [1, 3, 5, 6, 8, 2]);
    }

    #[test]
    fn descending_run_stops_at_ties() {
        let mut v = [5, 4, 4, 3];
        assert_eq!(natural_run_length(&mut v, &mut lt), 2);
        assert_eq!(v, [4, 5, 4, 3]);
    }

    #[test]
    fn whole_descending_slice_is_one_run() {
        let mut v: Vec<i32> = (0..1000).rev().collect();
        assert_eq!(natural_run_length(&mut v, &mut lt), 1000);
        assert!(v.iter().copied().eq(0..1000));
    }

    #[test]
    fn blocks_are_sorted_and_long_enough() {
        let mut v: Vec<i32> = (0..500).map(|i| (i * 7919) % 263).collect();
        let min_run = 32;
        prepare_runs(&mut v, min_run, &mut lt);

        let mut start = 0;
        while start < v.len() {
            let len = ascending_run_length(&v[start..], &mut lt);
            assert!(len >= min_run || start + len == v.len());
            start += len;
        }
    }

    #[test]
    fn short_input_becomes_one_block() {
        let mut v = [3, 9, 1, 1, 7, 0, 4];
        let n = v.len();
        prepare_runs(&mut v, n, &mut lt);
        assert_eq!(v, [0, 1, 1, 3, 4, 7, 9]);
    }
}
