//! This crate exposes an unbalanced Binary Search Tree (BST) with set semantics,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search for, and delete stored values. BSTs are typically defined
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
//! Searching for a value takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances itself, so
//! while random insertion orders give a height around `O(lg N)`, inserting values in
//! sorted order gives a height of `N`. BSTs also naturally support sorted iteration
//! by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! Because the invariants are strict, inserting a value that is already present
//! does nothing, so the tree behaves as an ordered set.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree: Tree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
//!
//! assert!(tree.search(&6));
//! assert!(!tree.search(&10));
//!
//! tree.delete(&7);
//! assert_eq!(tree.inorder_vals(), vec![2, 3, 4, 5, 6, 8]);
//! assert!(tree.validate().is_ok());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traverse;
pub mod tree;
mod util;

#[cfg(test)]
mod test;

pub use error::{InvariantError, Result};
pub use tree::Tree;
