//! This crate exposes a sorted set built on a plain Binary Search Tree along with a handful of
//! sorting exercises, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because both comparisons are strict, no value is stored twice, which makes a BST a natural
//! fit for a set. Searching takes `O(height)`. The [`tree::Tree`] here does not rebalance, so
//! inserting values in sorted order gives a tree whose height is its size. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! ## Sorting
//!
//! [`sorting`] holds small in-memory sorting tasks: times of day, addresses grouped by house,
//! temperatures, moving the most frequent number to the back of a sequence, and merging two
//! sorted arrays.
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, structural changes to the tree are reported through the
//! [`tracing`](https://docs.rs/tracing) crate.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

/// Emits a `tracing` event at TRACE level when the `tracing` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

/// Emits a `tracing` event at DEBUG level when the `tracing` feature is enabled.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod error;
pub mod sorting;
pub mod tree;
