//! An unbalanced BST where every node lives in its own `Box` and owns its
//! children. Modifying operations take `&mut self` and change the tree in
//! place.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::owned::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting the same key again changes nothing.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! tree.delete(&1);
//! assert!(!tree.contains(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

/// The place a node hangs from: either the root of the tree or the left/right
/// child slot of its parent.
type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced Binary Search Tree over unique keys. This can be used for
/// inserting, finding, deleting and iterating keys in ascending order.
pub struct Tree<K> {
    root: Link<K>,
}

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The child slot a search for a key comparing as `ordering` to this
    /// node's key continues into.
    fn child_mut(&mut self, ordering: Ordering) -> &mut Link<K> {
        match ordering {
            Ordering::Less => &mut self.left,
            _ => &mut self.right,
        }
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // The derived drop would recurse once per level, which overflows the stack
    // on a degenerate tree.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    /// Clones the tree node for node so the copy has the same shape as the
    /// original.
    fn clone(&self) -> Self {
        enum Visit<'a, K> {
            Enter(&'a Node<K>),
            Exit(&'a Node<K>),
        }

        let mut pending: Vec<Visit<'_, K>> =
            self.root.as_deref().map(Visit::Enter).into_iter().collect();
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(node) => {
                    pending.push(Visit::Exit(node));
                    pending.extend(node.right.as_deref().map(Visit::Enter));
                    pending.extend(node.left.as_deref().map(Visit::Enter));
                }
                Visit::Exit(node) => {
                    // Both subtrees are already built, the right one on top.
                    let right = node.right.as_ref().and_then(|_| built.pop());
                    let left = node.left.as_ref().and_then(|_| built.pop());
                    built.push(Box::new(Node {
                        key: node.key.clone(),
                        left,
                        right,
                    }));
                }
            }
        }

        Self { root: built.pop() }
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
        Self { root: None }
    }

    /// Inserts the given key into the tree. Inserting a key that is already
    /// present does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::owned::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.traverse().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let link = seek(&mut self.root, &key);
        if link.is_some() {
            trace!("duplicate key rejected");
            return;
        }

        trace!("attaching new leaf");
        *link = Some(Node::new_boxed(key));
    }

    /// Returns whether a node with the given key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::owned::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Deletes the node containing the given key from the tree. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// A node with two children takes the key of its in-order successor (the
    /// smallest key of its right subtree) and the successor's node is removed
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::owned::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// tree.delete(&2);
    ///
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.traverse().collect::<Vec<_>>(), [&1, &3]);
    /// ```
    pub fn delete(&mut self, key: &K)
    where
        K: Ord,
    {
        let link = seek(&mut self.root, key);
        let Some(node) = link else {
            trace!("key to delete not found");
            return;
        };

        if node.left.is_some() && node.right.is_some() {
            trace!("replacing deleted key with its in-order successor");
            let successor_link = find_min(&mut node.right);
            if let Some(mut successor) = successor_link.take() {
                debug_assert!(successor.left.is_none());
                *successor_link = successor.right.take();
                node.key = successor.key;
            }
            return;
        }

        if let Some(mut deleted) = link.take() {
            trace!("splicing deleted node's only child, if any, into its place");
            *link = deleted.left.take().or_else(|| deleted.right.take());
        }
    }

    /// Returns an iterator over the keys of the tree in ascending order. The
    /// tree is left untouched so this can be called any number of times.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::owned::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
    /// assert_eq!(tree.traverse().count(), 5);
    /// ```
    pub fn traverse(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref())
    }

    /// Same as [`Tree::traverse`].
    pub fn iter(&self) -> Iter<'_, K> {
        self.traverse()
    }

    /// Counts the keys in the tree. The size isn't stored so this walks the
    /// whole tree.
    pub fn len(&self) -> usize {
        self.traverse().count()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

/// Walks down from `link` following `key` and returns the link that either
/// holds the node with `key` or is the empty slot where it would be attached.
fn seek<'a, K>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
where
    K: Ord,
{
    loop {
        let ordering = match link.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return link,
        };
        if ordering == Ordering::Equal {
            return link;
        }

        match link {
            Some(node) => link = node.child_mut(ordering),
            None => return link,
        }
    }
}

/// Returns the link holding the smallest node of the subtree hanging from
/// `link`, i.e. its leftmost node.
fn find_min<K>(mut link: &mut Link<K>) -> &mut Link<K> {
    loop {
        if !link.as_ref().is_some_and(|node| node.left.is_some()) {
            return link;
        }

        match link {
            Some(node) => link = &mut node.left,
            None => return link,
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
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
    /// Nodes whose key hasn't been yielded yet but whose left subtree has
    /// been pushed. The top of the stack holds the next key.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

impl<K> FusedIterator for Iter<'_, K> {}
