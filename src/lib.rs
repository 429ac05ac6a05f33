//! This crate exposes a Binary Search Tree (BST) over ordered keys that is
//! built balanced and can be rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! A consequence of these invariants is that no two `Node`s share a key.
//! Building a tree from a collection with duplicates keeps each key once and
//! inserting a key that is already present does nothing.
//!
//! ## Balance
//!
//! Searching takes `O(height)`. A [`Tree`] is built with minimal height
//! but it does *not* balance itself as keys are inserted and deleted, so
//! inserting keys in ascending order degrades it into a path. Use
//! [`Tree::is_balanced`] to check the shape and [`Tree::rebalance`] to
//! rebuild it.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! let mut tree = Tree::build([3, 1, 2, 3]);
//! assert_eq!(tree.inorder(), vec![1, 2, 3]);
//! assert!(tree.is_balanced());
//!
//! for key in 4..8 {
//!     tree.insert(key).unwrap();
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.level_order(), vec![4, 2, 6, 1, 3, 5, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
mod error;
mod node;
mod traverse;
mod tree;
mod util;

#[cfg(test)]
mod test;

pub use error::Error;
pub use node::{height, Node};
pub use tree::Tree;
