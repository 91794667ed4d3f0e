//! Trinkle: restore root order across trees
//!
//! Called on a tree whose root may be smaller than the roots to its left
//! (a freshly appended tree, or a child exposed by extraction). The value
//! at `root` walks leftward one tree at a time: while the previous root is
//! greater than it, and greater than both of its children, the two roots
//! swap. Once the walk stops, the tree it stopped in is sifted.
//!
//! On sorted input the first comparison fails, which is what makes the
//! whole sort O(n) there.

use super::{children, LeonardoHeap};
use crate::leonardo;
use crate::order::OrderRelation;

impl<T, O: OrderRelation<T>> LeonardoHeap<'_, T, O> {
    /// Trinkle the root of the tree of `order` at `root`
    ///
    /// The tree must be present in the record so its left neighbour can
    /// be found.
    pub(crate) fn trinkle(&mut self, mut root: usize, mut order: usize) -> Result<(), O::Error> {
        debug_assert!(self.record.contains(order));

        while let Some(previous_order) = self.record.previous(order) {
            let previous_root = root - leonardo::size(order);

            if !self.greater_at(previous_root, root)? {
                break;
            }

            // The previous root must also dominate both children.
            if order >= 2 {
                let (left, right) = children(root, order);
                if !self.greater_at(previous_root, right)? || !self.greater_at(previous_root, left)? {
                    break;
                }
            }

            self.v.swap(root, previous_root);
            root = previous_root;
            order = previous_order;
        }

        self.sift(root, order)
    }
}
