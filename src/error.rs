//! Error types for the set and the sorting routines.

/// Errors returned by [`Tree`][crate::tree::Tree] operations that can't produce a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SetError {
    /// The set has no elements, so there is no minimum or maximum.
    #[error("the set is empty")]
    Empty,
    /// The operation is part of the sorted-set surface but isn't provided by this tree.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Errors returned by the routines in [`sorting`][crate::sorting].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SortError {
    /// A temperature outside of -273.0..=500.0 degrees, in tenths of a degree.
    #[error("temperature {0} (tenths of a degree) is outside -2730..=5000")]
    TemperatureOutOfRange(i32),
    /// The destination of a merge doesn't have the expected layout of `free` empty slots followed
    /// by sorted values.
    #[error("merge destination of length {len} can't take {free} values at index {index}")]
    MergeShape {
        /// How many values the destination needed to make room for.
        free: usize,
        /// Length of the destination.
        len: usize,
        /// First slot that violated the layout.
        index: usize,
    },
}
