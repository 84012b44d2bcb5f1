use crate::util::*;

/// Returns the smallest index i such that every element of v[..i] is not
/// greater than probe and every element of v[i..] is greater than probe.
///
/// Inserting probe at i places it after all elements equal to it, which is
/// the stable position for an element coming from later in the input.
///
/// v must be sorted. Panics if is_less does.
pub fn upper_bound<T, F: Cmp<T>>(v: &[T], probe: &T, is_less: &mut F) -> usize {
    let mut left = 0;
    let mut right = v.len();
    while left < right {
        let mid = left + (right - left) / 2;
        if is_less(probe, &v[mid]) {
            right = mid;
        } else {
            left = mid + 1;
        }
    }
    left
}

/// Returns the smallest index i such that every element of v[..i] is less
/// than probe and every element of v[i..] is not less than probe.
///
/// This is the stable position for an element coming from earlier in the
/// input: it ends up before all elements equal to it.
///
/// v must be sorted. Panics if is_less does.
pub fn lower_bound<T, F: Cmp<T>>(v: &[T], probe: &T, is_less: &mut F) -> usize {
    let mut left = 0;
    let mut right = v.len();
    while left < right {
        let mid = left + (right - left) / 2;
        if is_less(&v[mid], probe) {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}
