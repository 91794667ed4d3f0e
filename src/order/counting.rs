//! Comparison counting
//!
//! Adaptivity is measured in comparisons, not wall-clock time: a sorted
//! input of length n must cost O(n) calls to the relation.

use super::OrderRelation;

/// Wraps a relation and counts how many times it is consulted
#[derive(Debug, Clone, Default)]
pub struct Counting<O> {
    inner: O,
    comparisons: u64,
}

impl<O> Counting<O> {
    /// Start counting from zero
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            comparisons: 0,
        }
    }

    /// Comparisons performed so far
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Reset the counter, keeping the wrapped relation
    pub fn reset(&mut self) {
        self.comparisons = 0;
    }
}

impl<T: ?Sized, O: OrderRelation<T>> OrderRelation<T> for Counting<O> {
    type Error = O::Error;

    #[inline]
    fn greater(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        self.comparisons += 1;
        self.inner.greater(a, b)
    }
}
