//! The Euler tour of a [`CartesianTree`]. It records every node when it is entered and again
//! when the traversal returns to it from a child, along with the node's depth. The lowest common
//! ancestor of two nodes is then the shallowest entry between their first occurrences.

use std::mem::size_of;

use crate::rmq::cartesian::CartesianTree;

/// Placeholder for nodes not yet visited during construction.
const UNVISITED: usize = usize::MAX;

/// The pending step of a node on the traversal stack.
#[derive(Clone, Copy, Debug)]
enum Visit {
    Enter,
    BetweenChildren,
    Exit,
}

/// An Euler tour over a Cartesian tree with a parallel depth sequence and a table mapping every
/// array index to the first tour position of its node.
///
/// Consecutive duplicate entries are never recorded. Returning to a node with a missing child is
/// indistinguishable from staying at that node, so such returns are dropped, and the tour has at
/// most `2n - 1` entries.
///
/// # Example
/// ```rust
/// use rmq_trees::rmq::{CartesianTree, EulerTour};
///
/// let tree = CartesianTree::from_slice(&[4, 2, 5]).unwrap();
/// let tour = EulerTour::new(&tree);
/// assert_eq!(tour.nodes(), &[1, 0, 1, 2, 1]);
/// assert_eq!(tour.depths(), &[0, 1, 0, 1, 0]);
/// assert_eq!(tour.first(2), 3);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerTour {
    nodes: Vec<usize>,
    depths: Vec<usize>,
    first: Vec<usize>,
}

impl EulerTour {
    /// Walks the tree depth-first from the root. The traversal uses an explicit stack, so
    /// degenerate trees as deep as the array is long do not exhaust the call stack.
    #[must_use]
    pub fn new(tree: &CartesianTree) -> Self {
        let len = tree.len();
        let mut tour = Self {
            nodes: Vec::with_capacity(2 * len - 1),
            depths: Vec::with_capacity(2 * len - 1),
            first: vec![UNVISITED; len],
        };

        let mut stack = vec![(tree.root(), 0, Visit::Enter)];
        while let Some((node, depth, visit)) = stack.pop() {
            tour.record(node, depth);
            match visit {
                Visit::Enter => {
                    stack.push((node, depth, Visit::BetweenChildren));
                    if let Some(left) = tree.node(node).left() {
                        stack.push((left, depth + 1, Visit::Enter));
                    }
                }
                Visit::BetweenChildren => {
                    stack.push((node, depth, Visit::Exit));
                    if let Some(right) = tree.node(node).right() {
                        stack.push((right, depth + 1, Visit::Enter));
                    }
                }
                Visit::Exit => {}
            }
        }

        debug_assert!(tour.first.iter().all(|&p| p != UNVISITED));
        debug_assert!(tour.nodes.len() < 2 * len);
        tour
    }

    fn record(&mut self, node: usize, depth: usize) {
        if self.nodes.last() == Some(&node) {
            return;
        }
        if self.first[node] == UNVISITED {
            self.first[node] = self.nodes.len();
        }
        self.nodes.push(node);
        self.depths.push(depth);
    }

    /// Returns the array indices of the visited nodes in tour order.
    #[must_use]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Returns the depth of the node at each tour position.
    #[must_use]
    pub fn depths(&self) -> &[usize] {
        &self.depths
    }

    /// Returns the array index of the node at tour position `position`.
    ///
    /// # Panics
    /// Panics if `position` is not smaller than the tour length.
    #[must_use]
    pub fn node(&self, position: usize) -> usize {
        self.nodes[position]
    }

    /// Returns the first tour position of the node for array index `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds for the array the tree was built over.
    #[must_use]
    pub fn first(&self, index: usize) -> usize {
        self.first[index]
    }

    /// Returns the number of entries in the tour.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false, since a tour visits at least the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the amount of memory used by the tour in bytes.
    #[must_use]
    pub fn heap_size(&self) -> usize {
        (self.nodes.len() + self.depths.len() + self.first.len()) * size_of::<usize>()
    }
}
