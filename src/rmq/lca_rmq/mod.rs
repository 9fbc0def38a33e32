//! Range minimum queries by reduction to lowest common ancestor queries. The array is turned into
//! a [`CartesianTree`], the tree is flattened with an [`EulerTour`], and a [`SparseTable`] over
//! the tour depths finds the shallowest tour entry between the first occurrences of the two
//! queried nodes. That entry is their lowest common ancestor, which by the heap order of the
//! Cartesian tree holds the minimum of the queried range.

use std::mem::size_of;
use std::ops::Deref;

use crate::error::{Result, RmqError};
use crate::rmq::cartesian::CartesianTree;
use crate::rmq::euler::EulerTour;
use crate::rmq::sparse::SparseTable;
use crate::rmq::{ordered_bounds, RangeMinimum};

/// A range minimum query structure with O(n log n) construction and constant time queries.
///
/// If the minimum of a range occurs more than once, the leftmost occurrence is returned: the
/// Cartesian tree places the leftmost of equal elements above the others, so it is the lowest
/// common ancestor.
///
/// # Example
/// ```rust
/// use rmq_trees::{LcaRmq, RangeMinimum};
///
/// let rmq = LcaRmq::new(vec![4, 2, 5, 1, 8, 0, 3, 1, 9]).unwrap();
///
/// assert_eq!(rmq.range_min(3, 5).unwrap(), (5, &0));
/// assert_eq!(rmq.range_min(0, 2).unwrap(), (1, &2));
/// assert_eq!(rmq.range_min(6, 7).unwrap(), (7, &1));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LcaRmq<T> {
    data: Vec<T>,
    tree: CartesianTree,
    tour: EulerTour,
    table: SparseTable,
}

impl<T: PartialOrd> LcaRmq<T> {
    /// Creates a new range minimum query structure from the given data. Creation time and space
    /// overhead are O(n log n) in the length of the data.
    ///
    /// # Errors
    /// Returns [`RmqError::EmptyInput`] if `data` is empty.
    pub fn new(data: Vec<T>) -> Result<Self> {
        let tree = CartesianTree::from_slice(&data)?;
        let tour = EulerTour::new(&tree);
        let table = SparseTable::new(tour.depths());

        tracing::debug!(
            len = data.len(),
            tour_len = tour.len(),
            levels = table.levels(),
            "built LCA range minimum structure"
        );

        Ok(Self {
            data,
            tree,
            tour,
            table,
        })
    }

    /// Creates a new range minimum query structure from a copy of the given data.
    ///
    /// # Errors
    /// Returns [`RmqError::EmptyInput`] if `data` is empty.
    pub fn from_slice(data: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        Self::new(data.to_vec())
    }

    /// Returns the Cartesian tree of the data.
    #[must_use]
    pub fn cartesian_tree(&self) -> &CartesianTree {
        &self.tree
    }

    /// Returns the Euler tour of the Cartesian tree.
    #[must_use]
    pub fn euler_tour(&self) -> &EulerTour {
        &self.tour
    }

    /// Returns the array index of the lowest common ancestor of the nodes for array indices `u`
    /// and `v` in the Cartesian tree.
    fn lca(&self, u: usize, v: usize) -> usize {
        let position = self
            .table
            .range_min(self.tour.depths(), self.tour.first(u), self.tour.first(v));
        self.tour.node(position)
    }

    /// Returns the amount of memory used by this data structure in bytes. This does not include
    /// space allocated but not in use (e.g. unused capacity of vectors).
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.data.len() * size_of::<T>()
            + self.tree.heap_size()
            + self.tour.heap_size()
            + self.table.heap_size()
    }
}

impl<T: PartialOrd> RangeMinimum<T> for LcaRmq<T> {
    fn range_min(&self, i: usize, j: usize) -> Result<(usize, &T)> {
        let (i, j) = ordered_bounds(i, j, self.data.len())?;
        let index = self.lca(i, j);
        Ok((index, &self.data[index]))
    }

    fn values(&self) -> &[T] {
        &self.data
    }
}

/// Implements Deref to delegate to the underlying data. This allows the user to use indexing
/// syntax on the RMQ data structure to access the underlying data, as well as iterators, etc.
impl<T> Deref for LcaRmq<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T: PartialOrd> TryFrom<Vec<T>> for LcaRmq<T> {
    type Error = RmqError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::new(data)
    }
}
