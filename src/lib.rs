//! This crate exposes two choices for an unbalanced Binary Search Tree (BST)
//! over unique, ordered keys, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the key that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` comparisons (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). Neither tree here
//! rebalances itself, so the shape of a tree is purely a function of the
//! order keys were inserted in, and inserting keys in sorted order degrades
//! it into a list. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! ## Implementations
//!
//! - [`owned`] stores each node in its own `Box`, with every node owning its
//!   children.
//! - [`arena`] stores every node in a single arena and links children by
//!   index, recycling the slots of deleted nodes.
//!
//! Both walk the tree iteratively, so even a degenerate tree never grows the
//! call stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::owned::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//!
//! tree.delete(&5);
//! assert!(!tree.contains(&5));
//! assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), [1, 3, 4, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod arena;
pub mod owned;

#[cfg(test)]
mod test;
