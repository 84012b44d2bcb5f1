#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Few distinct keys with a unique payload, so an unstable result would
    // show up as a mismatch against the stable std sort.
    let mut arr: Vec<(u8, usize)> = data.iter().enumerate().map(|(i, &b)| (b % 16, i)).collect();
    let mut arr2 = arr.clone();

    timsort::sort_by(&mut arr, |a, b| a.0.cmp(&b.0));
    arr2.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(arr, arr2);
});
