//! # Smoothsort over Leonardo heaps
//!
//! In-place, comparison-based sorting with O(n log n) worst case, O(n) on
//! already-sorted input, and O(1) auxiliary space.
//!
//! ## Core Algorithm
//!
//! 1. **Leonardo forest**: the unsorted prefix is a row of max-heaps whose
//!    sizes are Leonardo numbers L(k) = L(k-1) + L(k-2) + 1
//! 2. **Implicit layout**: only the set of tree orders is stored (a 128-bit
//!    record); every root position is index arithmetic
//! 3. **Build**: grow the forest one element at a time, `trinkle` the new root
//! 4. **Extract**: the rightmost root is always the maximum; detach it, split
//!    its tree and `trinkle` the two exposed roots
//!
//! Result: no allocation, no recursion, linear work on sorted runs.
//!
//! ## Usage Example
//!
//! ```
//! let mut v = vec![3, 1, 2];
//! smoothsort::sort(&mut v, false);
//! assert_eq!(v, [1, 2, 3]);
//!
//! smoothsort::sort(&mut v, true);
//! assert_eq!(v, [3, 2, 1]);
//! ```
//!
//! The sort is not stable. Comparators must be strict weak orderings;
//! anything else produces an unspecified (but memory-safe) permutation.

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod leonardo; // Leonardo number table
pub mod order;    // Order relations and comparison counting
pub mod forest;   // Implicit Leonardo heap forest, sift, trinkle
pub mod engine;   // Build/extract state machine
pub mod input;    // Line-oriented input parsing for the CLI
/// Python bindings exposing the sort to Python lists.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use engine::{ForestShape, Phase};
pub use forest::{ForestRecord, LeonardoHeap};
pub use leonardo::leonardo;
pub use order::{
    Ascending, ByGreater, ByKey, Counting, Descending, Direction, OrderRelation, Partial,
    TryByGreater,
};

use std::convert::Infallible;

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while sorting
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Two elements had no defined order (e.g. a NaN)
    #[error("encountered a pair of elements with no defined order")]
    Incomparable,
}

/// Sort `v` in place, ascending or descending
///
/// Returns `v` for chaining. Slices of length 0 or 1 are returned
/// untouched without a single comparison.
pub fn sort<T: Ord>(v: &mut [T], descending: bool) -> &mut [T] {
    if descending {
        into_ok(engine::run(v, Descending));
    } else {
        into_ok(engine::run(v, Ascending));
    }
    v
}

/// Sort with a strict "greater" predicate
///
/// `greater(a, b)` must return `true` iff `a` belongs after `b`.
pub fn sort_by<T, F>(v: &mut [T], greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    into_ok(engine::run(v, ByGreater(greater)));
}

/// Sort ascending by an extracted key
pub fn sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    into_ok(engine::run(v, ByKey(key)));
}

/// Sort with a fallible "greater" predicate
///
/// The first error aborts the sort and is returned unchanged; `v` is then
/// left as some permutation of its original contents.
pub fn try_sort_by<T, E, F>(v: &mut [T], greater: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    engine::run(v, TryByGreater(greater)).map(|_| ())
}

/// Sort `PartialOrd` values, failing on incomparable pairs
pub fn sort_partial<T: PartialOrd>(v: &mut [T], descending: bool) -> Result<&mut [T], SortError> {
    engine::run(v, Partial(Direction::from_descending(descending)))?;
    Ok(v)
}

/// Sort under an arbitrary [`OrderRelation`]
pub fn sort_with<T, O: OrderRelation<T>>(v: &mut [T], order: O) -> Result<(), O::Error> {
    engine::run(v, order).map(|_| ())
}

fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Configuration for a [`Smoothsort`] instance
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortConfig {
    /// Output direction for naturally ordered elements
    pub direction: Direction,

    /// Count comparisons and record the forest shape
    pub profile: bool,
}

impl SortConfig {
    /// Ascending, no profiling
    pub fn ascending() -> Self {
        Self::default()
    }

    /// Descending, no profiling
    pub fn descending() -> Self {
        Self {
            direction: Direction::Descending,
            profile: false,
        }
    }

    /// Direction from the conventional `descending` flag
    pub fn from_descending(descending: bool) -> Self {
        Self {
            direction: Direction::from_descending(descending),
            profile: false,
        }
    }

    /// Enable or disable profiling
    pub fn with_profiling(mut self, enabled: bool) -> Self {
        self.profile = enabled;
        self
    }
}

/// Measurements from one profiled sort
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortProfile {
    /// Calls made to the order relation
    pub comparisons: u64,

    /// Trees in the forest once it spanned the slice
    pub trees_built: usize,

    /// Order of the largest tree
    pub max_order: Option<usize>,
}

impl SortProfile {
    /// Average comparisons per element
    pub fn comparisons_per_element(&self, len: usize) -> f64 {
        if len == 0 {
            0.0
        } else {
            self.comparisons as f64 / len as f64
        }
    }

    /// Generate report
    pub fn report(&self, len: usize) -> String {
        let max_order = self
            .max_order
            .map_or_else(|| "-".to_string(), |order| order.to_string());
        format!(
            "Comparisons: {} ({:.2} per element)\nForest: {} trees, max order {}",
            self.comparisons,
            self.comparisons_per_element(len),
            self.trees_built,
            max_order
        )
    }
}

/// Result of a [`Smoothsort`] run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortReport {
    /// Number of elements sorted
    pub len: usize,

    /// Direction applied
    pub direction: Direction,

    /// Profile (if enabled)
    pub profile: Option<SortProfile>,
}

/// Configured sorter
///
/// Thin wrapper over the free functions that applies a [`SortConfig`] and
/// optionally profiles each call.
#[derive(Debug, Clone, Default)]
pub struct Smoothsort {
    config: SortConfig,
}

impl Smoothsort {
    /// Create sorter
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Sort naturally ordered elements
    pub fn sort<T: Ord>(&self, v: &mut [T]) -> SortReport {
        let report = match self.config.direction {
            Direction::Ascending => self.run(v, Ascending),
            Direction::Descending => self.run(v, Descending),
        };
        into_ok(report)
    }

    /// Sort `PartialOrd` elements, failing on incomparable pairs
    pub fn sort_partial<T: PartialOrd>(&self, v: &mut [T]) -> Result<SortReport, SortError> {
        self.run(v, Partial(self.config.direction))
    }

    fn run<T, O: OrderRelation<T>>(&self, v: &mut [T], order: O) -> Result<SortReport, O::Error> {
        let len = v.len();

        let profile = if self.config.profile {
            let mut counting = Counting::new(order);
            let shape = engine::run(v, &mut counting)?;
            Some(SortProfile {
                comparisons: counting.comparisons(),
                trees_built: shape.trees,
                max_order: shape.max_order,
            })
        } else {
            engine::run(v, order)?;
            None
        };

        debug!(
            len,
            direction = %self.config.direction,
            comparisons = profile.as_ref().map(|p| p.comparisons),
            "sorted"
        );

        Ok(SortReport {
            len,
            direction: self.config.direction,
            profile,
        })
    }
}
