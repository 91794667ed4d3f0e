//! Build phase: heapify left to right
//!
//! Each step hands `v[head]` to the forest. The record decides whether it
//! becomes the root of a merged tree (two rightmost trees of orders k+1
//! and k) or a new singleton, then the new root is trinkled into place.
//! No elements move during a merge: the new element already sits where
//! the merged tree's root belongs.

use crate::forest::LeonardoHeap;
use crate::order::OrderRelation;

impl<T, O: OrderRelation<T>> LeonardoHeap<'_, T, O> {
    /// Add the next element to the forest
    ///
    /// Returns `false` once the forest already spans the whole slice.
    pub fn grow(&mut self) -> Result<bool, O::Error> {
        if self.head == self.v.len() {
            return Ok(false);
        }

        let order = self.record.grow();
        let root = self.head;
        self.head += 1;
        self.trinkle(root, order)?;

        Ok(true)
    }
}

/// Heapify the entire slice
pub(crate) fn build<T, O: OrderRelation<T>>(heap: &mut LeonardoHeap<'_, T, O>) -> Result<(), O::Error> {
    while heap.grow()? {}
    Ok(())
}
