//! Leonardo heap forest
//!
//! The forest is implicit: a prefix `v[..head]` of the slice, partitioned
//! into adjacent trees whose sizes are Leonardo numbers in decreasing
//! order. Only the set of orders is stored ([`ForestRecord`]); every root
//! position is recomputed from `head` by subtracting tree sizes right to
//! left.
//!
//! Tree layout is post-order. A tree of order k rooted at `r` spans
//! `[r + 1 - L(k), r]`; for k >= 2 its right child (order k-2) is rooted at
//! `r - 1` and its left child (order k-1) at `r - 1 - L(k-2)`.
//!
//! Invariants maintained between operations:
//! 1. every tree is max-heap ordered under the relation
//! 2. roots are non-decreasing left to right, so the rightmost root is the
//!    maximum of the whole region

mod record;
mod sift;
mod trinkle;

pub use record::ForestRecord;

use std::fmt;

use crate::leonardo;
use crate::order::OrderRelation;

/// In-place Leonardo heap over a borrowed slice
pub struct LeonardoHeap<'a, T, O> {
    /// Backing elements; `v[..head]` is the forest
    pub(crate) v: &'a mut [T],
    /// Exclusive end of the forest region
    pub(crate) head: usize,
    /// Orders of the trees currently in the forest
    pub(crate) record: ForestRecord,
    /// Relation deciding which element is "greater"
    pub(crate) order: O,
}

impl<'a, T, O: OrderRelation<T>> LeonardoHeap<'a, T, O> {
    /// Empty forest at the start of `v`
    pub fn new(v: &'a mut [T], order: O) -> Self {
        Self {
            v,
            head: 0,
            record: ForestRecord::new(),
            order,
        }
    }

    /// Exclusive end of the forest region
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Length of the backing slice
    #[inline]
    pub fn capacity(&self) -> usize {
        self.v.len()
    }

    /// Current tree orders
    pub fn record(&self) -> &ForestRecord {
        &self.record
    }

    /// Read-only view of the backing slice
    pub fn as_slice(&self) -> &[T] {
        &*self.v
    }

    /// `(root index, order)` for each tree, right to left
    pub fn roots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut end = self.head;
        self.record.orders_from_right().map(move |order| {
            let root = end - 1;
            end -= leonardo::size(order);
            (root, order)
        })
    }

    #[inline]
    pub(crate) fn greater_at(&mut self, a: usize, b: usize) -> Result<bool, O::Error> {
        self.order.greater(&self.v[a], &self.v[b])
    }
}

impl<T, O> fmt::Debug for LeonardoHeap<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeonardoHeap")
            .field("len", &self.v.len())
            .field("head", &self.head)
            .field("record", &self.record)
            .finish()
    }
}

/// Child roots of the tree of `order >= 2` rooted at `root`
///
/// Returns `(left, right)`: left has order-1, right has order-2.
#[inline(always)]
pub(crate) fn children(root: usize, order: usize) -> (usize, usize) {
    debug_assert!(order >= 2, "order {} tree has no children", order);
    let right = root - 1;
    let left = right - leonardo::size(order - 2);
    (left, right)
}
