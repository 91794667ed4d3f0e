mod common;

use common::{assert_sorted, multiset, scrambled};
use smoothsort::{sort, sort_by, sort_by_key};
use test_case::test_case;

#[test_case(vec![], false, vec![] ; "empty")]
#[test_case(vec![5], false, vec![5] ; "single")]
#[test_case(vec![3, 1, 2], false, vec![1, 2, 3] ; "three ascending")]
#[test_case(vec![3, 1, 2], true, vec![3, 2, 1] ; "three descending")]
#[test_case(vec![5, 5, 5, 5], false, vec![5, 5, 5, 5] ; "all equal")]
#[test_case(vec![1, 2, 3, 4, 5], false, vec![1, 2, 3, 4, 5] ; "already sorted")]
#[test_case(vec![5, 4, 3, 2, 1], false, vec![1, 2, 3, 4, 5] ; "reversed")]
#[test_case(vec![2, 1], false, vec![1, 2] ; "pair")]
#[test_case(vec![-3, 7, 0, -3, 7, 1], true, vec![7, 7, 1, 0, -3, -3] ; "duplicates descending")]
fn sorts_small_inputs(mut input: Vec<i32>, descending: bool, expected: Vec<i32>) {
    sort(&mut input, descending);
    assert_eq!(input, expected);
}

#[test_case(0 ; "len 0")]
#[test_case(1 ; "len 1")]
#[test_case(2 ; "len 2")]
#[test_case(8 ; "len 8")]
#[test_case(9 ; "len 9")]
#[test_case(41 ; "leonardo length")]
#[test_case(42 ; "leonardo length plus one")]
#[test_case(1000 ; "len 1000")]
#[test_case(4097 ; "len 4097")]
fn sorts_scrambled_lengths(len: usize) {
    for descending in [false, true] {
        let original = scrambled(len, len as u64 + 17);
        let mut v = original.clone();
        sort(&mut v, descending);
        assert_sorted(&v, descending);
        assert_eq!(multiset(&v), multiset(&original));
    }
}

#[test]
fn all_equal_keys_leave_every_element_in_place() {
    let original: Vec<(u8, usize)> = (0..3_000).map(|i| (4, i)).collect();
    for descending in [false, true] {
        let mut v = original.clone();
        if descending {
            sort_by(&mut v, |a, b| a.0 < b.0);
        } else {
            sort_by(&mut v, |a, b| a.0 > b.0);
        }
        assert_eq!(v, original);
    }
}

#[test]
fn sorts_strings() {
    let mut words = vec!["pear", "apple", "fig", "banana", "apple"];
    sort(&mut words, false);
    assert_eq!(words, vec!["apple", "apple", "banana", "fig", "pear"]);
}

#[test]
fn sorts_by_predicate() {
    // Odd numbers first, each group ascending.
    let mut v: Vec<u32> = (0..20).rev().collect();
    sort_by(&mut v, |a, b| (a % 2 == 0, a) > (b % 2 == 0, b));
    assert_eq!(
        v,
        vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 0, 2, 4, 6, 8, 10, 12, 14, 16, 18]
    );
}

#[test]
fn sorts_by_key() {
    let mut people = vec![("carol", 41), ("alice", 29), ("bob", 35)];
    sort_by_key(&mut people, |&(_, age)| age);
    assert_eq!(people, vec![("alice", 29), ("bob", 35), ("carol", 41)]);
}

#[test]
fn sorts_runs_and_sawtooth() {
    let mut organ_pipe: Vec<u32> = (0..500).chain((0..500).rev()).collect();
    sort(&mut organ_pipe, false);
    assert_sorted(&organ_pipe, false);

    let mut sawtooth: Vec<u32> = (0..1200).map(|i| i % 37).collect();
    sort(&mut sawtooth, true);
    assert_sorted(&sawtooth, true);
}
