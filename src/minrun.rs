use crate::MIN_MERGE;

/// Computes the minimum run length for a slice of length n.
///
/// We halve n until it drops below MIN_MERGE, remembering whether any of the
/// shifted out bits were set. The result k is such that n / k is close to,
/// but strictly less than, a power of two, which keeps the final merges
/// balanced. For n < MIN_MERGE the whole slice is a single run.
pub fn min_run_length(mut n: usize) -> usize {
    let mut r = 0;
    while n >= MIN_MERGE {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}
