//! This module contains a sparse table. It pre-computes the position of the minimum element in
//! intervals of length 2^k for all k and uses this information to answer queries in constant
//! time with two overlapping blocks. This uses O(n log n) space overhead.
//!
//! The table stores positions only. The keys it was built over are passed to every query, so the
//! LCA structure can build it over the Euler tour depths without copying them.

use std::mem::size_of;

/// A sparse table of argmin positions over a slice of keys.
///
/// Entry `(i, k)` holds the position of the minimum key in `[i, i + 2^k)`. Ties prefer the left
/// block, which makes every answer the leftmost minimum in its range.
///
/// # Example
/// ```rust
/// use rmq_trees::rmq::SparseTable;
///
/// let keys = [5, 3, 4, 1, 2];
/// let table = SparseTable::new(&keys);
/// assert_eq!(table.range_min(&keys, 0, 2), 1);
/// assert_eq!(table.range_min(&keys, 0, 4), 3);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseTable {
    len: usize,
    levels: usize,

    // the results are stored in a one-dimensional array, where the k'th element of row i is the
    // position of the minimum key in the interval [i, i + 2^k). Entries with i + 2^k > len are
    // never read and stay zero.
    results: Vec<usize>,
}

impl SparseTable {
    /// Create a new sparse table over `keys`. This uses O(n log n) space and time.
    #[must_use]
    pub fn new<K: PartialOrd>(keys: &[K]) -> Self {
        let len = keys.len();
        if len == 0 {
            return Self {
                len,
                levels: 0,
                results: Vec::new(),
            };
        }

        let levels = len.ilog2() as usize + 1;
        let mut results = vec![0; len * levels];

        for i in 0..len {
            results[i * levels] = i;
        }

        // use the minima of smaller intervals to calculate the minima of larger intervals
        for k in 1..levels {
            let half = 1 << (k - 1);
            for i in 0..=len - (1 << k) {
                let left = results[i * levels + k - 1];
                let right = results[(i + half) * levels + k - 1];
                results[i * levels + k] = if keys[right] < keys[left] { right } else { left };
            }
        }

        Self {
            len,
            levels,
            results,
        }
    }

    /// Returns the position of the minimum key in the range `[i, j]` in constant time. The range
    /// is inclusive and the bounds are swapped if `i > j`. `keys` must be the slice the table was
    /// built over.
    ///
    /// # Panics
    /// Calling this function where one of the indices is out of bounds will produce a panic.
    /// Passing a different key slice produces a panic or an incorrect result.
    #[must_use]
    pub fn range_min<K: PartialOrd>(&self, keys: &[K], i: usize, j: usize) -> usize {
        debug_assert_eq!(keys.len(), self.len, "sparse table queried with foreign keys");
        let (i, j) = if i <= j { (i, j) } else { (j, i) };
        assert!(j < self.len, "index {} out of bounds for length {}", j, self.len);

        let k = (j - i + 1).ilog2() as usize;
        let left = self.results[i * self.levels + k];
        let right = self.results[(j + 1 - (1 << k)) * self.levels + k];

        // the minimum of the two overlapping sub-queries is the minimum of the whole query
        if keys[right] < keys[left] {
            right
        } else {
            left
        }
    }

    /// Returns the number of keys the table was built over.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table was built over an empty slice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of power-of-two levels in the table.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Returns the amount of memory used by the table in bytes. This does not include space
    /// allocated but not in use (e.g. unused capacity of vectors).
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.results.len() * size_of::<usize>()
    }
}
