//! Comparison counts on structured inputs

mod common;

use common::scrambled;
use smoothsort::{sort_with, Ascending, Counting, Descending};
use test_case::test_case;

fn comparisons_ascending(mut v: Vec<u32>) -> u64 {
    let mut counting = Counting::new(Ascending);
    sort_with(&mut v, &mut counting).unwrap();
    counting.comparisons()
}

fn log_bound(n: usize) -> u64 {
    let log = (n as f64).log2().ceil() as u64;
    4 * n as u64 * log.max(1)
}

#[test_case(10 ; "ten")]
#[test_case(100 ; "hundred")]
#[test_case(1_000 ; "thousand")]
#[test_case(10_000 ; "ten thousand")]
fn sorted_input_is_linear(n: usize) {
    let comparisons = comparisons_ascending((0..n as u32).collect());
    assert!(
        comparisons <= 6 * n as u64,
        "{} comparisons for {} sorted elements",
        comparisons,
        n
    );
}

#[test_case(100 ; "hundred")]
#[test_case(10_000 ; "ten thousand")]
fn reversed_input_is_n_log_n(n: usize) {
    let sorted = comparisons_ascending((0..n as u32).collect());
    let reversed = comparisons_ascending((0..n as u32).rev().collect());
    assert!(reversed <= log_bound(n), "{} comparisons for {} elements", reversed, n);
    assert!(reversed > sorted);
}

#[test]
fn scrambled_input_is_n_log_n() {
    let n = 20_000;
    let comparisons = comparisons_ascending(scrambled(n, 7));
    assert!(comparisons <= log_bound(n));
}

#[test]
fn presorted_descending_is_linear_when_sorting_descending() {
    let n = 5_000;
    let mut v: Vec<u32> = (0..n).rev().collect();
    let mut counting = Counting::new(Descending);
    sort_with(&mut v, &mut counting).unwrap();
    assert!(counting.comparisons() <= 6 * n as u64);
}

#[test]
fn five_sorted_elements() {
    let mut v = vec![1, 2, 3, 4, 5];
    let mut counting = Counting::new(Ascending);
    sort_with(&mut v, &mut counting).unwrap();
    assert_eq!(v, vec![1, 2, 3, 4, 5]);
    assert!(counting.comparisons() <= 2 * 5, "{} comparisons", counting.comparisons());
}

#[test_case(3_000 ; "three thousand")]
#[test_case(100_000 ; "hundred thousand")]
fn all_equal_input_is_linear(n: usize) {
    let comparisons = comparisons_ascending(vec![7; n]);
    assert!(comparisons <= 6 * n as u64, "{} comparisons for {} equal elements", comparisons, n);
}

#[test]
fn short_inputs_need_no_comparisons() {
    assert_eq!(comparisons_ascending(vec![]), 0);
    assert_eq!(comparisons_ascending(vec![9]), 0);
}
