//! A materialized segment tree for range minimum queries. Every node covers a contiguous range of
//! the array and stores the index of the minimum in that range. Queries decompose the requested
//! range into O(log n) fully covered nodes.

use std::mem::size_of;
use std::ops::Deref;

use crate::error::{Result, RmqError};
use crate::rmq::{ordered_bounds, RangeMinimum};
use crate::trees::BinaryTree;

/// A node of a [`SegmentTreeRmq`], covering the inclusive array range `[start, end]`.
/// Leaves have `start == end` and no children; inner nodes always have both children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentNode {
    start: usize,
    end: usize,
    min_index: usize,
    children: Option<(usize, usize)>,
}

impl SegmentNode {
    /// The first array index covered by this node.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The last array index covered by this node.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The leftmost array index holding the minimum of the covered range.
    #[must_use]
    pub fn min_index(&self) -> usize {
        self.min_index
    }

    /// Handles of the left and right child, or `None` for a leaf.
    #[must_use]
    pub fn children(&self) -> Option<(usize, usize)> {
        self.children
    }

    /// Returns true if the node covers a single element.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// A range minimum query structure with O(n) construction and O(log n) queries.
///
/// Nodes are stored in an arena and addressed by handles (their arena position). Each inner node
/// over `[l, r]` splits at `mid = (l + r) / 2` into `[l, mid]` and `[mid + 1, r]`, so the tree has
/// `2n - 1` nodes and a height of `ceil(log2 n) + 1`. Construction and queries recurse at most
/// that deep, regardless of the order of the input.
///
/// If the minimum of a range occurs more than once, the leftmost occurrence is returned.
///
/// # Example
/// ```rust
/// use rmq_trees::{RangeMinimum, SegmentTreeRmq};
///
/// let rmq = SegmentTreeRmq::new(vec![4, 2, 5, 1, 8, 0, 3, 1, 9]).unwrap();
///
/// assert_eq!(rmq.range_min(3, 5).unwrap(), (5, &0));
/// assert_eq!(rmq.range_min(0, 2).unwrap(), (1, &2));
/// assert_eq!(rmq.height(), 5);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentTreeRmq<T> {
    data: Vec<T>,
    nodes: Vec<SegmentNode>,
    root: usize,
    height: usize,
}

impl<T: PartialOrd> SegmentTreeRmq<T> {
    /// Creates a new segment tree over the given data in O(n) time and space.
    ///
    /// # Errors
    /// Returns [`RmqError::EmptyInput`] if `data` is empty.
    pub fn new(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(RmqError::EmptyInput);
        }

        let mut nodes = Vec::with_capacity(2 * data.len() - 1);
        let (root, height) = Self::build(&data, &mut nodes, 0, data.len() - 1);
        debug_assert_eq!(nodes.len(), 2 * data.len() - 1);

        tracing::debug!(
            len = data.len(),
            nodes = nodes.len(),
            height,
            "built segment tree range minimum structure"
        );

        Ok(Self {
            data,
            nodes,
            root,
            height,
        })
    }

    /// Creates a new segment tree over a copy of the given data.
    ///
    /// # Errors
    /// Returns [`RmqError::EmptyInput`] if `data` is empty.
    pub fn from_slice(data: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        Self::new(data.to_vec())
    }

    /// Builds the subtree over `[start, end]` bottom-up and returns its handle and height.
    /// Children are pushed before their parent, so the root is the last node in the arena.
    fn build(data: &[T], nodes: &mut Vec<SegmentNode>, start: usize, end: usize) -> (usize, usize) {
        if start == end {
            nodes.push(SegmentNode {
                start,
                end,
                min_index: start,
                children: None,
            });
            return (nodes.len() - 1, 1);
        }

        let mid = start + (end - start) / 2;
        let (left, left_height) = Self::build(data, nodes, start, mid);
        let (right, right_height) = Self::build(data, nodes, mid + 1, end);

        let min_index = better(data, nodes[left].min_index, nodes[right].min_index);
        nodes.push(SegmentNode {
            start,
            end,
            min_index,
            children: Some((left, right)),
        });
        (nodes.len() - 1, 1 + left_height.max(right_height))
    }

    /// Returns the leftmost index of the minimum in the intersection of `[l, r]` with the range of
    /// `node`, or `None` if they are disjoint.
    fn query(&self, node: usize, l: usize, r: usize) -> Option<usize> {
        let segment = &self.nodes[node];
        if segment.end < l || segment.start > r {
            return None;
        }
        if l <= segment.start && segment.end <= r {
            return Some(segment.min_index);
        }

        // a partially covered node cannot be a leaf, so it has children
        let (left, right) = segment.children?;
        match (self.query(left, l, r), self.query(right, l, r)) {
            (Some(a), Some(b)) => Some(better(&self.data, a, b)),
            (a, None) => a,
            (None, b) => b,
        }
    }

    /// Returns the handle of the root node.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the node for the given handle.
    ///
    /// # Panics
    /// Panics if `handle` is not a valid node handle.
    #[must_use]
    pub fn node(&self, handle: usize) -> &SegmentNode {
        &self.nodes[handle]
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of levels of the tree. A tree over a single element has height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the amount of memory used by this data structure in bytes. This does not include
    /// space allocated but not in use (e.g. unused capacity of vectors).
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.data.len() * size_of::<T>() + self.nodes.len() * size_of::<SegmentNode>()
    }
}

/// Picks the index holding the smaller value, preferring `a` on ties. `a` must lie left of `b`.
#[inline]
fn better<T: PartialOrd>(data: &[T], a: usize, b: usize) -> usize {
    debug_assert!(a < b);
    if data[b] < data[a] {
        b
    } else {
        a
    }
}

impl<T: PartialOrd> RangeMinimum<T> for SegmentTreeRmq<T> {
    fn range_min(&self, i: usize, j: usize) -> Result<(usize, &T)> {
        let len = self.data.len();
        let (i, j) = ordered_bounds(i, j, len)?;
        // the root covers [0, len - 1], so a checked query always intersects it
        let index = self.query(self.root, i, j);
        debug_assert!(index.is_some(), "query [{i}, {j}] missed the root");
        let index = index.ok_or(RmqError::OutOfRange { index: j, len })?;
        Ok((index, &self.data[index]))
    }

    fn values(&self) -> &[T] {
        &self.data
    }
}

impl<T> BinaryTree for SegmentTreeRmq<T> {
    type NodeHandle = usize;

    fn root(&self) -> usize {
        self.root
    }

    fn left(&self, node: usize) -> Option<usize> {
        self.nodes[node].children.map(|(left, _)| left)
    }

    fn right(&self, node: usize) -> Option<usize> {
        self.nodes[node].children.map(|(_, right)| right)
    }

    fn label(&self, node: usize) -> String {
        let node = &self.nodes[node];
        format!("[{}:{}]", node.start, node.end)
    }

    fn height(&self) -> usize {
        self.height
    }
}

/// Implements Deref to delegate to the underlying data. This allows the user to use indexing
/// syntax on the RMQ data structure to access the underlying data, as well as iterators, etc.
impl<T> Deref for SegmentTreeRmq<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T: PartialOrd> TryFrom<Vec<T>> for SegmentTreeRmq<T> {
    type Error = RmqError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::new(data)
    }
}
