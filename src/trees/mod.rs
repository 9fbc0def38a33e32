//! Binary tree navigation shared by the [Cartesian tree][crate::rmq::CartesianTree] and the
//! [segment tree][crate::rmq::SegmentTreeRmq], and an [ASCII renderer][AsciiTree] built on it.
//!
//! The renderer is a debugging aid only. No query ever consults it.

mod ascii;

pub use ascii::{AsciiTree, RenderOutcome, DEFAULT_MAX_HEIGHT};

/// A trait for binary trees defining the most basic tree navigation operations.
/// Trees implementing it are never empty, so a root always exists.
pub trait BinaryTree {
    /// A type that represents a node during tree navigation.
    type NodeHandle: Copy;

    /// Returns the root node of the tree.
    fn root(&self) -> Self::NodeHandle;

    /// Returns the left child of a node, if it exists.
    fn left(&self, node: Self::NodeHandle) -> Option<Self::NodeHandle>;

    /// Returns the right child of a node, if it exists.
    fn right(&self, node: Self::NodeHandle) -> Option<Self::NodeHandle>;

    /// Returns a short printable description of a node.
    fn label(&self, node: Self::NodeHandle) -> String;

    /// Returns the number of levels of the tree. A tree consisting only of its root has height 1.
    ///
    /// The default implementation walks the whole tree with an explicit stack, so it handles
    /// trees of arbitrary depth.
    fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.root(), 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(self.left(node).map(|child| (child, depth + 1)));
            stack.extend(self.right(node).map(|child| (child, depth + 1)));
        }
        height
    }
}
