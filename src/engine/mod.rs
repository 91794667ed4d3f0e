//! Sort engine
//!
//! One call walks a fixed state machine:
//!
//! ```text
//! Trivial (n <= 1)
//! Building -> Built -> Extracting -> Sorted
//! ```
//!
//! `Built` is an instant, not a resting state: it is where the forest
//! shape is observed before extraction begins. No phase is skipped for
//! n > 1.

mod build;
mod extract;

use tracing::trace;

use crate::forest::{ForestRecord, LeonardoHeap};
use crate::leonardo::order_for_len;
use crate::order::OrderRelation;

/// Stage of a single sort call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Fewer than two elements: nothing to do
    Trivial,
    /// Growing the forest left to right
    Building,
    /// Forest spans the whole slice
    Built,
    /// Shrinking the forest right to left
    Extracting,
    /// Done
    Sorted,
}

impl Phase {
    /// Initial phase for a slice of `len` elements
    pub fn initial(len: usize) -> Self {
        if len <= 1 {
            Phase::Trivial
        } else {
            Phase::Building
        }
    }

    /// Successor phase, `None` for terminal phases
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Building => Some(Phase::Built),
            Phase::Built => Some(Phase::Extracting),
            Phase::Extracting => Some(Phase::Sorted),
            Phase::Trivial | Phase::Sorted => None,
        }
    }
}

/// Forest shape at the `Built` instant
///
/// The leftmost tree always has the largest order `k` with L(k) <= len
/// (see [`order_for_len`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForestShape {
    /// Number of trees spanning the slice
    pub trees: usize,
    /// Order of the leftmost (largest) tree
    pub max_order: Option<usize>,
}

impl ForestShape {
    fn of(record: &ForestRecord) -> Self {
        Self {
            trees: record.len(),
            max_order: record.first(),
        }
    }
}

/// Sort `v` in place under `order`
///
/// Errors from the relation abort the sort immediately; `v` is then some
/// permutation of its input.
pub fn run<T, O: OrderRelation<T>>(v: &mut [T], order: O) -> Result<ForestShape, O::Error> {
    let span = tracing::trace_span!("smoothsort", len = v.len());
    let _enter = span.enter();

    let mut phase = Phase::initial(v.len());
    let mut shape = ForestShape::default();
    let mut heap = LeonardoHeap::new(v, order);

    loop {
        trace!(?phase, head = heap.head(), "entering phase");
        match phase {
            Phase::Trivial | Phase::Sorted => break,
            Phase::Building => build::build(&mut heap)?,
            Phase::Built => {
                shape = ForestShape::of(heap.record());
                debug_assert_eq!(shape.max_order, order_for_len(heap.head()));
            }
            Phase::Extracting => extract::extract(&mut heap)?,
        }
        phase = match phase.next() {
            Some(next) => next,
            None => break,
        };
    }

    Ok(shape)
}
