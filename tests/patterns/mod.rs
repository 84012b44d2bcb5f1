#![allow(dead_code)]

//! Input patterns for testing and benchmarking. Every random pattern is fully
//! determined by its size and seed.

use rand::prelude::*;

pub const SEED: u64 = 0x5eed_cafe_f00d;

pub fn random(size: usize, seed: u64) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(size: usize, range: std::ops::RangeInclusive<i32>, seed: u64) -> Vec<i32> {
    // :.:.:.::

    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn few_unique(size: usize, seed: u64) -> Vec<i32> {
    let unique = ((size as f64).log2().round() as i32).max(1);
    random_uniform(size, 0..=unique, seed)
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; size]
}

pub fn saw_mixed(size: usize, saw_count: usize, seed: u64) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random(size, seed);
    let chunk_size = (size / saw_count.max(1)).max(1);
    let mut rng = StdRng::seed_from_u64(seed ^ 0x9e37_79b9);

    for chunk in vals.chunks_mut(chunk_size) {
        if rng.gen::<bool>() {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize, seed: u64) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(size, seed);
    vals[..size / 2].sort();
    vals[size / 2..].sort_by_key(|&e| std::cmp::Reverse(e));
    vals
}

pub fn ascending_with_noise(size: usize, seed: u64) -> Vec<i32> {
    //     .:
    //   :.:: <- a few out of place elements
    // .:::::

    let mut vals = ascending(size);
    if size < 2 {
        return vals;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..(size / 100).max(1) {
        let a = rng.gen_range(0..size);
        let b = rng.gen_range(0..size);
        vals.swap(a, b);
    }
    vals
}
