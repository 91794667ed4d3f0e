#![allow(dead_code)]

use std::collections::HashMap;
use std::hash::Hash;

use rand::{rngs::StdRng, Rng as _, SeedableRng};

pub fn assert_sorted<T: Ord + std::fmt::Debug>(v: &[T], descending: bool) {
    for (idx, pair) in v.windows(2).enumerate() {
        let in_order = if descending {
            pair[0] >= pair[1]
        } else {
            pair[0] <= pair[1]
        };
        assert!(in_order, "out of order at {}: {:?} then {:?}", idx, pair[0], pair[1]);
    }
}

pub fn multiset<T: Eq + Hash + Clone>(v: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for item in v {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

/// Deterministic pseudo-random values
pub fn scrambled(len: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<u32>()).collect()
}
