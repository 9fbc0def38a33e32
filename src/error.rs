//! Error types for building and querying range minimum structures.

/// A specialized Result type for range minimum query operations.
pub type Result<T> = std::result::Result<T, RmqError>;

/// Errors that can occur when building or querying a range minimum structure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RmqError {
    /// The input array has no elements, so no minimum is defined.
    #[error("cannot build a range minimum query structure over an empty array")]
    EmptyInput,

    /// A query bound lies outside of the array.
    #[error("index {index} out of bounds for array of length {len}")]
    OutOfRange {
        /// The offending query bound.
        index: usize,
        /// The length of the array.
        len: usize,
    },

    /// A half-open range query contained no elements.
    #[error("range {start}..{end} is empty")]
    EmptyRange {
        /// The first index of the range.
        start: usize,
        /// The exclusive end of the range.
        end: usize,
    },
}
