//! Sift: restore heap order inside one tree
//!
//! Precondition: both subtrees of the root are heap ordered; only the root
//! may be out of place. The root value sinks along the path of larger
//! children until neither child is greater. O(order) = O(log n) swaps,
//! iterative.
//!
//! Ties between the two children go to the right child: the left child is
//! chosen only when strictly greater.

use super::{children, LeonardoHeap};
use crate::order::OrderRelation;

impl<T, O: OrderRelation<T>> LeonardoHeap<'_, T, O> {
    /// Sift the root of the tree of `order` at `root` down into place
    pub(crate) fn sift(&mut self, mut root: usize, mut order: usize) -> Result<(), O::Error> {
        while order >= 2 {
            let (left, right) = children(root, order);

            let (child, child_order) = if self.greater_at(left, right)? {
                (left, order - 1)
            } else {
                (right, order - 2)
            };

            if !self.greater_at(child, root)? {
                break;
            }

            self.v.swap(root, child);
            root = child;
            order = child_order;
        }
        Ok(())
    }
}
