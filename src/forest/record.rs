//! Forest record
//!
//! Which tree orders are present, one bit per order.
//! Bit k set <=> the forest holds a tree of size L(k).
//!
//! Orders in a Leonardo forest are pairwise distinct and decrease left to
//! right, so the set of orders fully determines the layout. The rightmost
//! tree is the lowest set bit. 128 bits cover every order up to
//! `MAX_ORDER`, so the record lives on the stack: O(1) space.

use bitvec::prelude::*;

use crate::leonardo::MAX_ORDER;

const ORDER_BITS: usize = 128;

const _: () = assert!(MAX_ORDER < ORDER_BITS, "forest record cannot hold every order");

type OrderBits = BitArr!(for ORDER_BITS, in u64, Lsb0);

/// Compact set of tree orders making up a Leonardo forest
#[derive(Debug, Clone)]
pub struct ForestRecord {
    orders: OrderBits,
}

impl ForestRecord {
    /// Number of orders the record can hold
    pub const CAPACITY: usize = ORDER_BITS;

    /// Empty forest
    pub fn new() -> Self {
        Self {
            orders: BitArray::ZERO,
        }
    }

    /// No trees present
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.not_any()
    }

    /// Number of trees
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.count_ones()
    }

    /// Whether a tree of `order` is present
    #[inline]
    pub fn contains(&self, order: usize) -> bool {
        self.orders.get(order).map_or(false, |bit| *bit)
    }

    /// Order of the rightmost (smallest) tree
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.orders.first_one()
    }

    /// Order of the largest (leftmost) tree
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.orders.last_one()
    }

    /// Order of the tree immediately left of the tree of `order`
    #[inline]
    pub fn previous(&self, order: usize) -> Option<usize> {
        let above = order + 1;
        self.orders
            .get(above..)
            .and_then(|bits| bits.first_one())
            .map(|offset| above + offset)
    }

    /// Append a new rightmost tree
    #[inline]
    pub fn push(&mut self, order: usize) {
        debug_assert!(
            self.last().map_or(true, |last| order < last),
            "order {} would not be the smallest in {:?}",
            order,
            self
        );
        self.orders.set(order, true);
    }

    /// Remove the rightmost tree, returning its order
    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        let order = self.last()?;
        self.orders.set(order, false);
        Some(order)
    }

    /// Extend the forest by one element and return the new rightmost order
    ///
    /// If the two rightmost trees have orders k+1 and k they become the
    /// children of a new tree of order k+2. Otherwise a singleton is
    /// appended: order 0 after an order-1 tree, order 1 in every other case.
    pub fn grow(&mut self) -> usize {
        let order = match self.last() {
            Some(last) if self.previous(last) == Some(last + 1) => {
                self.orders.set(last, false);
                self.orders.set(last + 1, false);
                last + 2
            }
            Some(1) => 0,
            _ => 1,
        };
        self.orders.set(order, true);
        order
    }

    /// Orders left to right (largest first)
    pub fn orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.orders.iter_ones().rev()
    }

    /// Orders right to left (smallest first)
    pub fn orders_from_right(&self) -> impl Iterator<Item = usize> + '_ {
        self.orders.iter_ones()
    }

    /// Only the two rightmost trees may have consecutive orders
    pub fn is_canonical(&self) -> bool {
        let mut orders = self.orders_from_right().skip(1);
        let mut prev = match orders.next() {
            Some(order) => order,
            None => return true,
        };
        for order in orders {
            if order == prev + 1 {
                return false;
            }
            prev = order;
        }
        true
    }
}

impl Default for ForestRecord {
    fn default() -> Self {
        Self::new()
    }
}
