//! The Cartesian tree of an array. The tree is simultaneously a min-heap by value and has the
//! original array order as its in-order traversal, so the lowest common ancestor of two nodes is
//! the minimum of the array range between them.
//!
//! Nodes are stored in an arena indexed by their position in the array. Child relations are
//! stored as indices, so the tree owns no values and is trivially shareable once built.

use std::mem::size_of;

use crate::error::{Result, RmqError};
use crate::trees::BinaryTree;

/// A node of a [`CartesianTree`]. The node's array index is its position in the arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartesianNode {
    left: Option<usize>,
    right: Option<usize>,
}

impl CartesianNode {
    /// Returns the array index of the left child, if it exists.
    #[must_use]
    pub fn left(&self) -> Option<usize> {
        self.left
    }

    /// Returns the array index of the right child, if it exists.
    #[must_use]
    pub fn right(&self) -> Option<usize> {
        self.right
    }
}

/// A Cartesian tree over a non-empty array with one node per element.
///
/// Node handles are array indices. Equal values do not displace each other during construction,
/// so the leftmost of several equal elements becomes an ancestor of the others.
///
/// # Example
/// ```rust
/// use rmq_trees::rmq::CartesianTree;
///
/// let tree = CartesianTree::from_slice(&[4, 2, 5]).unwrap();
/// assert_eq!(tree.root(), 1);
/// assert_eq!(tree.node(1).left(), Some(0));
/// assert_eq!(tree.node(1).right(), Some(2));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartesianTree {
    nodes: Vec<CartesianNode>,
    root: usize,
}

impl CartesianTree {
    /// Builds the Cartesian tree of `values` in linear time with a monotonic stack holding the
    /// rightmost path of the tree built so far.
    ///
    /// # Errors
    /// Returns [`RmqError::EmptyInput`] if `values` is empty.
    pub fn from_slice<T: PartialOrd>(values: &[T]) -> Result<Self> {
        if values.is_empty() {
            return Err(RmqError::EmptyInput);
        }

        let mut nodes = vec![CartesianNode::default(); values.len()];
        let mut rightmost_path: Vec<usize> = Vec::with_capacity(values.len());

        for (i, value) in values.iter().enumerate() {
            let mut last_popped = None;
            while let Some(&top) = rightmost_path.last() {
                if *value < values[top] {
                    last_popped = rightmost_path.pop();
                } else {
                    break;
                }
            }

            if let Some(&top) = rightmost_path.last() {
                nodes[top].right = Some(i);
            }
            nodes[i].left = last_popped;
            rightmost_path.push(i);
        }

        // the bottom of the stack is the only node never popped, which is the root
        let root = rightmost_path[0];
        Ok(Self { nodes, root })
    }

    /// Returns the array index of the root, which holds the leftmost global minimum.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the node for the element at array index `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn node(&self, index: usize) -> &CartesianNode {
        &self.nodes[index]
    }

    /// Returns the number of nodes, which equals the length of the array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false, since trees are only built over non-empty arrays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the amount of memory used by the tree in bytes.
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.nodes.len() * size_of::<CartesianNode>()
    }
}

impl BinaryTree for CartesianTree {
    type NodeHandle = usize;

    fn root(&self) -> usize {
        self.root
    }

    fn left(&self, node: usize) -> Option<usize> {
        self.nodes[node].left
    }

    fn right(&self, node: usize) -> Option<usize> {
        self.nodes[node].right
    }

    fn label(&self, node: usize) -> String {
        node.to_string()
    }
}
