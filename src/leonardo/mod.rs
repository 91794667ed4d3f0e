//! Leonardo numbers
//!
//! L(0) = L(1) = 1, L(k) = L(k-1) + L(k-2) + 1
//!
//! Every tree in the heap forest has a Leonardo number of elements. The
//! sequence is materialized once, at compile time, for every order whose
//! value fits in `usize`. Lookups are O(1) and the table is never mutated.

/// Largest order `k` such that L(k) fits in `usize` (91 on 64-bit targets)
pub const MAX_ORDER: usize = max_order();

static TABLE: [usize; MAX_ORDER + 1] = build_table();

/// Compute L(k) by accumulation
///
/// O(k) time, O(1) space, no recursion. Returns `None` when L(k)
/// overflows `usize`.
pub const fn leonardo_iterative(k: usize) -> Option<usize> {
    if k < 2 {
        return Some(1);
    }

    // prev = L(i-2), curr = L(i-1)
    let mut prev: usize = 1;
    let mut curr: usize = 1;
    let mut i = 2;
    while i <= k {
        let next = match prev.checked_add(curr) {
            Some(sum) => match sum.checked_add(1) {
                Some(next) => next,
                None => return None,
            },
            None => return None,
        };
        prev = curr;
        curr = next;
        i += 1;
    }

    Some(curr)
}

const fn max_order() -> usize {
    let mut k = 1;
    while leonardo_iterative(k + 1).is_some() {
        k += 1;
    }
    k
}

const fn build_table() -> [usize; MAX_ORDER + 1] {
    let mut table = [1usize; MAX_ORDER + 1];
    let mut k = 2;
    while k <= MAX_ORDER {
        table[k] = table[k - 1] + table[k - 2] + 1;
        k += 1;
    }
    table
}

/// L(k), with L(k) = 0 for negative `k`
///
/// Orders beyond [`MAX_ORDER`] saturate to `usize::MAX`.
#[inline]
pub fn leonardo(k: isize) -> usize {
    if k < 0 {
        return 0;
    }
    TABLE.get(k as usize).copied().unwrap_or(usize::MAX)
}

/// Size of a tree of the given order
///
/// Hot-path variant of [`leonardo`] for orders held in a forest record,
/// which never exceed [`MAX_ORDER`].
#[inline(always)]
pub(crate) fn size(order: usize) -> usize {
    debug_assert!(order <= MAX_ORDER, "order {} exceeds table", order);
    TABLE[order]
}

/// Largest order `k` with L(k) <= `len`
///
/// This is the order of the leftmost tree once a slice of length `len`
/// has been fully heapified. `None` for an empty slice.
pub fn order_for_len(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(TABLE.partition_point(|&l| l <= len) - 1)
}

/// Iterator over L(0), L(1), ..., L(MAX_ORDER)
#[derive(Debug, Clone)]
pub struct Leonardo {
    next: usize,
}

impl Leonardo {
    /// Start at L(0)
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl Iterator for Leonardo {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let value = TABLE.get(self.next).copied()?;
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = TABLE.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Leonardo {}
