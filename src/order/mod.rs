//! Order relations
//!
//! Every structural step of the sort (sift, trinkle, build, extract) asks a
//! single question: is `a` strictly greater than `b`? The answer comes from
//! an [`OrderRelation`]. Sort direction lives here and nowhere else:
//! descending order is just a relation whose "greater" is `a < b`.
//!
//! Relations must be strict weak orderings. A relation that is not (e.g.
//! non-transitive) leaves the output order unspecified but never causes
//! memory unsafety or a panic. This is not checked at runtime.

mod counting;

pub use counting::Counting;

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;

use crate::SortError;

/// Strict "greater" predicate driving the sort
///
/// Fallible so that comparison errors (incomparable values, exceptions
/// raised by foreign comparators) surface to the caller instead of being
/// swallowed. Infallible relations use [`Infallible`] as their error.
pub trait OrderRelation<T: ?Sized> {
    /// Error produced by a failed comparison
    type Error;

    /// Returns `true` iff `a` must be placed after `b`
    fn greater(&mut self, a: &T, b: &T) -> Result<bool, Self::Error>;
}

impl<T: ?Sized, O: OrderRelation<T> + ?Sized> OrderRelation<T> for &mut O {
    type Error = O::Error;

    #[inline]
    fn greater(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        (**self).greater(a, b)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    /// Non-decreasing output
    #[default]
    Ascending,
    /// Non-increasing output
    Descending,
}

impl Direction {
    /// Map the conventional `descending` flag onto a direction
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

/// Natural ascending order: `greater(a, b) = a > b`
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl<T: Ord + ?Sized> OrderRelation<T> for Ascending {
    type Error = Infallible;

    #[inline]
    fn greater(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a > b)
    }
}

/// Natural descending order: `greater(a, b) = a < b`
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending;

impl<T: Ord + ?Sized> OrderRelation<T> for Descending {
    type Error = Infallible;

    #[inline]
    fn greater(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a < b)
    }
}

/// Relation from an infallible `greater` closure
#[derive(Clone, Copy)]
pub struct ByGreater<F>(pub F);

impl<T: ?Sized, F> OrderRelation<T> for ByGreater<F>
where
    F: FnMut(&T, &T) -> bool,
{
    type Error = Infallible;

    #[inline]
    fn greater(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok((self.0)(a, b))
    }
}

impl<F> fmt::Debug for ByGreater<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByGreater(..)")
    }
}

/// Relation from a fallible `greater` closure
#[derive(Clone, Copy)]
pub struct TryByGreater<F>(pub F);

impl<T: ?Sized, E, F> OrderRelation<T> for TryByGreater<F>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    type Error = E;

    #[inline]
    fn greater(&mut self, a: &T, b: &T) -> Result<bool, E> {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for TryByGreater<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TryByGreater(..)")
    }
}

/// Ascending order of an extracted key
#[derive(Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> OrderRelation<T> for ByKey<F>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    type Error = Infallible;

    #[inline]
    fn greater(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        let ka = (self.0)(a);
        Ok(ka > (self.0)(b))
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByKey(..)")
    }
}

/// Order over `PartialOrd` values
///
/// Comparing two values with no defined order (e.g. a NaN) fails with
/// [`SortError::Incomparable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Partial(pub Direction);

impl<T: PartialOrd + ?Sized> OrderRelation<T> for Partial {
    type Error = SortError;

    #[inline]
    fn greater(&mut self, a: &T, b: &T) -> Result<bool, SortError> {
        let ordering = a.partial_cmp(b).ok_or(SortError::Incomparable)?;
        Ok(match self.0 {
            Direction::Ascending => ordering == Ordering::Greater,
            Direction::Descending => ordering == Ordering::Less,
        })
    }
}
