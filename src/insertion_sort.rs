use crate::binary_search::upper_bound;
use crate::tracking::ptr;
use crate::util::*;

/// Sorts v using binary insertion sort, given that v[..offset] is already
/// sorted.
///
/// Every comparison for an element happens before any element is moved, so a
/// panic in is_less leaves v a permutation of its input.
pub fn binary_insertion_sort<T, F: Cmp<T>>(v: &mut [T], offset: usize, is_less: &mut F) {
    let n = v.len();
    assert_abort(offset <= n);

    for i in offset.max(1)..n {
        let pos = {
            let (sorted, unsorted) = v.split_at(i);
            upper_bound(sorted, &unsorted[0], is_less)
        };

        if pos < i {
            unsafe {
                // SAFETY: pos < i < n so both ranges are in bounds. The element
                // at i is read out before its slot is overwritten by the shift
                // and written back into the slot vacated at pos.
                let base = v.as_mut_ptr();
                let tmp = ptr::read(base.add(i));
                ptr::copy(base.add(pos), base.add(pos + 1), i - pos);
                ptr::write(base.add(pos), tmp);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_inputs() {
        let mut lt = |a: &i32, b: &i32| a < b;
        let mut v = [5, 2, 9, 1, 5, 6, 0, -3];
        binary_insertion_sort(&mut v, 1, &mut lt);
        assert_eq!(v, [-3, 0, 1, 2, 5, 5, 6, 9]);

        let mut empty: [i32; 0] = [];
        binary_insertion_sort(&mut empty, 0, &mut lt);

        let mut single = [42];
        binary_insertion_sort(&mut single, 0, &mut lt);
        assert_eq!(single, [42]);
    }

    #[test]
    fn respects_sorted_prefix() {
        let mut v = [1, 4, 8, 3, 2, 9];
        binary_insertion_sort(&mut v, 3, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [1, 2, 3, 4, 8, 9]);
    }

    #[test]
    fn is_stable() {
        let mut v: Vec<(u8, usize)> = [3, 1, 3, 2, 1, 3, 0, 2]
            .iter()
            .enumerate()
            .map(|(i, &k)| (k, i))
            .collect();
        binary_insertion_sort(&mut v, 1, &mut |a: &(u8, usize), b: &(u8, usize)| a.0 < b.0);
        assert_eq!(
            v,
            [(0, 6), (1, 1), (1, 4), (2, 3), (2, 7), (3, 0), (3, 2), (3, 5)]
        );
    }

    #[test]
    fn sorted_input_costs_no_comparisons_past_offset() {
        let mut v: Vec<i32> = (0..64).collect();
        let mut count = 0;
        binary_insertion_sort(&mut v, 64, &mut |a: &i32, b: &i32| {
            count += 1;
            a < b
        });
        assert_eq!(count, 0);
        assert!(v.iter().copied().eq(0..64));
    }

    #[test]
    fn owned_elements_survive_shifts() {
        let mut v: Vec<String> = ["pear", "apple", "fig", "kiwi", "banana"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        binary_insertion_sort(&mut v, 1, &mut |a: &String, b: &String| a < b);
        assert_eq!(v, ["apple", "banana", "fig", "kiwi", "pear"]);
    }
}
