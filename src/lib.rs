#![warn(missing_docs)]

//! This crate provides two static range minimum query (RMQ) data structures over arrays of
//! totally ordered values. Both are built once and are immutable afterwards, so a built structure
//! can be shared between any number of readers without synchronization.
//!
//! # Data structures
//!  - [LCA RMQ][rmq::LcaRmq]: builds a [Cartesian tree][rmq::CartesianTree], flattens it with an
//!    [Euler tour][rmq::EulerTour] and answers lowest-common-ancestor queries with a
//!    [sparse table][rmq::SparseTable] over the tour depths. O(n log n) construction,
//!    constant time queries.
//!  - [Segment tree RMQ][rmq::SegmentTreeRmq]: a fully materialized binary tree over index
//!    ranges. O(n) construction, O(log n) queries.
//!
//! Both implement [`RangeMinimum`], which answers queries with the index and the value of the
//! minimum in an inclusive range. If the minimum occurs more than once, the leftmost occurrence is
//! reported.
//! Values that are not comparable, such as `f64::NAN`, give unspecified answers on which the two
//! structures may disagree.
//!
//! ```rust
//! use rmq_trees::{LcaRmq, RangeMinimum, SegmentTreeRmq};
//!
//! let data = vec![4, 2, 5, 1, 8, 0, 3, 1, 9];
//! let lca = LcaRmq::new(data.clone()).unwrap();
//! let seg = SegmentTreeRmq::new(data).unwrap();
//!
//! assert_eq!(lca.range_min(3, 5).unwrap(), (5, &0));
//! assert_eq!(seg.range_min(3, 5).unwrap(), (5, &0));
//! assert_eq!(lca.range_min(0, 2).unwrap(), (1, &2));
//! ```
//!
//! # Trees
//! The [trees] module contains a [`BinaryTree`][trees::BinaryTree] navigation trait implemented by
//! the Cartesian tree and the segment tree, and an [ASCII renderer][trees::AsciiTree] for small
//! trees, intended for debugging.
//!
//! # Logging
//! Construction and rendering emit [`tracing`] events. The crate never installs a subscriber.
//!
//! # Features
//!  - `serde`: derives `Serialize` and `Deserialize` for all built structures.

pub use crate::error::{Result, RmqError};
pub use rmq::lca_rmq::LcaRmq;
pub use rmq::segment_tree::SegmentTreeRmq;
pub use rmq::RangeMinimum;

pub mod error;
pub mod rmq;
pub mod trees;
