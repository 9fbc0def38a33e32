//! Range minimum query data structures. These data structures calculate the index and value of the
//! minimum element in a range of a static array. The implementations are located in the
//! [lca_rmq] and [segment_tree] modules; the building blocks of the LCA reduction are exposed in
//! [cartesian], [euler] and [sparse].

use std::ops::{Bound, RangeBounds};

use crate::error::{Result, RmqError};

pub mod cartesian;
pub mod euler;
pub mod lca_rmq;
pub mod segment_tree;
pub mod sparse;

#[cfg(test)]
mod naive;

pub use cartesian::CartesianTree;
pub use euler::EulerTour;
pub use lca_rmq::LcaRmq;
pub use segment_tree::{SegmentNode, SegmentTreeRmq};
pub use sparse::SparseTable;

/// A common trait for range minimum query data structures to allow generic implementations.
///
/// All queries use inclusive bounds. If the minimum occurs multiple times in the queried range,
/// the leftmost index holding it is returned.
///
/// Values that are not comparable with each other, such as `f64::NAN`, never cause a panic or an
/// out-of-bounds access, but the returned minimum is unspecified and different implementations
/// may disagree on it.
pub trait RangeMinimum<T> {
    /// Returns the index and value of the minimum element in the range `[i, j]`.
    /// If `i > j`, the bounds are swapped.
    ///
    /// # Errors
    /// Returns [`RmqError::OutOfRange`] if either bound is not a valid index.
    fn range_min(&self, i: usize, j: usize) -> Result<(usize, &T)>;

    /// Returns the values the structure was built over.
    fn values(&self) -> &[T];

    /// Returns the number of elements in the underlying array.
    fn len(&self) -> usize {
        self.values().len()
    }

    /// Returns true if the underlying array is empty. Structures can only be built over
    /// non-empty arrays, so this is always false for built structures.
    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Convenience function for [`RangeMinimum::range_min`] for using range operators.
    ///
    /// # Example
    /// ```rust
    /// use rmq_trees::{RangeMinimum, SegmentTreeRmq};
    ///
    /// let rmq = SegmentTreeRmq::new(vec![5, 4, 3, 2, 1]).unwrap();
    /// assert_eq!(rmq.range_min_with_range(0..3).unwrap(), (2, &3));
    /// assert_eq!(rmq.range_min_with_range(0..=3).unwrap(), (3, &2));
    /// assert_eq!(rmq.range_min_with_range(..).unwrap(), (4, &1));
    /// ```
    ///
    /// # Errors
    /// Returns [`RmqError::EmptyRange`] if the range contains no indices, and
    /// [`RmqError::OutOfRange`] if it extends past the end of the array.
    fn range_min_with_range<R: RangeBounds<usize>>(&self, range: R) -> Result<(usize, &T)> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(i) => *i,
            Bound::Excluded(i) => i.saturating_add(1),
            Bound::Unbounded => 0,
        };
        // inclusive end, `None` if the range ends before index 0
        let last = match range.end_bound() {
            Bound::Included(j) => Some(*j),
            Bound::Excluded(j) => j.checked_sub(1),
            Bound::Unbounded => len.checked_sub(1),
        };

        match last {
            Some(last) if start <= last => {
                if last >= len {
                    return Err(RmqError::OutOfRange { index: last, len });
                }
                self.range_min(start, last)
            }
            // start > last here, so last + 1 cannot overflow
            _ => Err(RmqError::EmptyRange {
                start,
                end: last.map_or(0, |last| last + 1),
            }),
        }
    }
}

/// Checks that both query bounds are valid indices of an array of length `len` and returns them
/// in ascending order.
pub(crate) fn ordered_bounds(i: usize, j: usize, len: usize) -> Result<(usize, usize)> {
    for index in [i, j] {
        if index >= len {
            return Err(RmqError::OutOfRange { index, len });
        }
    }
    Ok(if i <= j { (i, j) } else { (j, i) })
}
