//! Extraction phase: dismantle the forest right to left
//!
//! The rightmost root is the maximum of `v[..head]` and already sits at
//! `head - 1`, its final position, so extraction is a matter of shrinking
//! `head`. When the detached tree had children they become two separate
//! trees whose roots are trinkled back into root order, left child first.

use crate::forest::{children, LeonardoHeap};
use crate::order::OrderRelation;

impl<T, O: OrderRelation<T>> LeonardoHeap<'_, T, O> {
    /// Detach the rightmost root, returning its (final) index
    ///
    /// Returns `None` once the forest is empty.
    pub fn shrink(&mut self) -> Result<Option<usize>, O::Error> {
        let order = match self.record.pop() {
            Some(order) => order,
            None => return Ok(None),
        };
        self.head -= 1;
        let placed = self.head;

        if order >= 2 {
            let (left, right) = children(placed, order);
            self.record.push(order - 1);
            self.record.push(order - 2);
            self.trinkle(left, order - 1)?;
            self.trinkle(right, order - 2)?;
        }

        Ok(Some(placed))
    }
}

/// Empty the forest, leaving the slice sorted
pub(crate) fn extract<T, O: OrderRelation<T>>(heap: &mut LeonardoHeap<'_, T, O>) -> Result<(), O::Error> {
    while heap.shrink()?.is_some() {}
    Ok(())
}
