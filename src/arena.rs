//! An unbalanced BST whose nodes all live in one [`generational_arena::Arena`].
//! Children are linked by [`Index`] instead of by pointer, and the arena's
//! free list hands the slots of deleted nodes out again to later inserts, so
//! a tree that churns through inserts and deletes stops allocating once the
//! arena is big enough.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::arena::Tree;
//!
//! let mut tree = Tree::with_capacity(8);
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert!(tree.contains(&3));
//!
//! tree.delete(&2);
//! assert_eq!(tree.traverse().collect::<Vec<_>>(), [&1, &3]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use generational_arena::{Arena, Index};
use tracing::trace;

/// An unbalanced Binary Search Tree over unique keys, stored in an arena.
#[derive(Clone)]
pub struct Tree<K> {
    nodes: Arena<Node<K>>,
    root: Option<Index>,
}

#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Option<Index>,
    right: Option<Index>,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// Where a link to a node is stored.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Root,
    Left(Index),
    Right(Index),
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.traverse()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Generates a new, empty `Tree` that can hold `capacity` keys before its
    /// arena has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Inserts the given key into the tree. Inserting a key that is already
    /// present does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let (slot, found) = self.seek(&key);
        if found.is_some() {
            trace!("duplicate key rejected");
            return;
        }

        let index = self.nodes.insert(Node::leaf(key));
        trace!(?index, ?slot, "attaching new leaf");
        self.set_link(slot, Some(index));
    }

    /// Returns whether a node with the given key exists in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.seek(key).1.is_some()
    }

    /// Deletes the node containing the given key from the tree. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// A node with two children takes the key of its in-order successor and
    /// the successor's slot is freed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::arena::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    /// tree.delete(&5);
    /// tree.delete(&42);
    ///
    /// assert_eq!(tree.traverse().collect::<Vec<_>>(), [&3, &8]);
    /// ```
    pub fn delete(&mut self, key: &K)
    where
        K: Ord,
    {
        let (slot, Some(index)) = self.seek(key) else {
            trace!("key to delete not found");
            return;
        };

        let node = &self.nodes[index];
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let (min_slot, min_index) = self.find_min(Slot::Right(index), right);
                trace!(?index, ?min_index, "replacing deleted key with its in-order successor");
                if let Some(successor) = self.nodes.remove(min_index) {
                    debug_assert!(successor.left.is_none());
                    self.set_link(min_slot, successor.right);
                    self.nodes[index].key = successor.key;
                }
            }
            (child, None) | (None, child) => {
                trace!(?index, ?child, "splicing deleted node's only child, if any, into its place");
                self.set_link(slot, child);
                self.nodes.remove(index);
            }
        }
    }

    /// Returns an iterator over the keys of the tree in ascending order. The
    /// tree is left untouched so this can be called any number of times.
    pub fn traverse(&self) -> Iter<'_, K> {
        Iter::new(&self.nodes, self.root)
    }

    /// Same as [`Tree::traverse`].
    pub fn iter(&self) -> Iter<'_, K> {
        self.traverse()
    }

    /// The number of keys in the tree, i.e. the number of occupied arena
    /// slots.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn link(&self, slot: Slot) -> Option<Index> {
        match slot {
            Slot::Root => self.root,
            Slot::Left(parent) => self.nodes[parent].left,
            Slot::Right(parent) => self.nodes[parent].right,
        }
    }

    fn set_link(&mut self, slot: Slot, child: Option<Index>) {
        match slot {
            Slot::Root => self.root = child,
            Slot::Left(parent) => self.nodes[parent].left = child,
            Slot::Right(parent) => self.nodes[parent].right = child,
        }
    }

    /// Walks down from the root following `key`. Returns the slot that either
    /// links to the node with `key` or is empty where it would be attached,
    /// along with that node's index if it exists.
    fn seek(&self, key: &K) -> (Slot, Option<Index>)
    where
        K: Ord,
    {
        let mut slot = Slot::Root;
        let mut current = self.root;
        while let Some(index) = current {
            slot = match key.cmp(&self.nodes[index].key) {
                Ordering::Less => Slot::Left(index),
                Ordering::Equal => break,
                Ordering::Greater => Slot::Right(index),
            };
            current = self.link(slot);
        }

        (slot, current)
    }

    /// Finds the smallest node of the subtree rooted at `index` (which hangs
    /// from `slot`) by following left children. Returns that node's index and
    /// the slot linking to it.
    fn find_min(&self, mut slot: Slot, mut index: Index) -> (Slot, Index) {
        while let Some(left) = self.nodes[index].left {
            slot = Slot::Left(index);
            index = left;
        }

        (slot, index)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = Self::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

/// In-order iterator over the keys of a [`Tree`]. Created by [`Tree::traverse`].
pub struct Iter<'a, K> {
    nodes: &'a Arena<Node<K>>,
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(nodes: &'a Arena<Node<K>>, root: Option<Index>) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        while let Some(index) = current {
            let node = &self.nodes[index];
            self.stack.push(node);
            current = node.left;
        }
    }
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right);
        Some(&node.key)
    }
}

impl<K> FusedIterator for Iter<'_, K> {}
