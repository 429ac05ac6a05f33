//! The [`Tree`] type and its construction, mutation and query operations.
//!
//! Deletion is written recursively over owned subtrees: each step takes
//! the subtree it works on out of its parent and hands back the (possibly
//! replaced) subtree for the parent to store again. Insertion, draining
//! and dropping walk the tree in a loop so a long path of nodes can't
//! overflow the stack.

use std::cmp::Ordering;
use std::ptr;

use crate::error::Error;
use crate::node::{Link, Node};
use crate::util::sorted_unique;

/// A Binary Search Tree over unique keys. This can be used for inserting,
/// finding, and deleting keys.
///
/// A tree is built with minimal height but does not rebalance itself as it
/// is mutated. See [`Tree::rebalance`].
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Detach every child before its parent goes so each drop is shallow.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree from the given keys. The keys may be in any
    /// order and may contain duplicates, which are dropped.
    ///
    /// The middle key of the sorted keys becomes the root and the keys on
    /// either side of it are built into the left and right subtrees the
    /// same way. For an even number of keys the upper of the two middle
    /// keys is picked.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::build([4, 1, 3, 2, 4]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// assert_eq!(tree.preorder(), vec![3, 2, 1, 4]);
    /// ```
    pub fn build(keys: impl IntoIterator<Item = K>) -> Self
    where
        K: Ord,
    {
        let keys = sorted_unique(keys);
        let len = keys.len();
        Self {
            root: build_link(&mut keys.into_iter(), len),
            len,
        }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a key into the tree. Inserting a key that is already present
    /// does nothing. The tree is not rebalanced.
    ///
    /// A key of the tree's own type is always valid so this never fails.
    /// See [`Tree::try_insert`] for values that first need converting.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.preorder(), vec![2, 1]);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<(), Error>
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return Ok(()),
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::boxed(key));
        self.len += 1;
        Ok(())
    }

    /// Converts a value into a key and inserts it like [`Tree::insert`].
    ///
    /// If the conversion fails, [`Error::InvalidKey`] is returned and the
    /// tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<u8> = Tree::build([1, 2, 3]);
    ///
    /// tree.try_insert(200).unwrap();
    /// assert!(tree.contains(&200));
    ///
    /// // Doesn't fit in a `u8`.
    /// assert_eq!(tree.try_insert(300), Err(Error::InvalidKey));
    /// assert_eq!(tree.inorder(), vec![1, 2, 3, 200]);
    /// ```
    pub fn try_insert<Q>(&mut self, value: Q) -> Result<(), Error>
    where
        K: Ord,
        Q: TryInto<K>,
    {
        let key = value.try_into().map_err(|_| Error::InvalidKey)?;
        self.insert(key)
    }

    /// Deletes the given key from the tree. If the tree does not contain the
    /// key, nothing happens.
    ///
    /// A node with two children takes the key of its in-order successor,
    /// the smallest key in its right subtree, and the successor's node is
    /// removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::build(1..=7);
    /// tree.delete(&4);
    ///
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(5));
    /// assert_eq!(tree.inorder(), vec![1, 2, 3, 5, 6, 7]);
    ///
    /// // Not present, so nothing happens.
    /// tree.delete(&42);
    /// assert_eq!(tree.len(), 6);
    /// ```
    pub fn delete(&mut self, key: &K)
    where
        K: Ord,
    {
        self.root = delete_link(self.root.take(), key, &mut self.len);
    }

    /// Potentially finds the node holding the given key. If no node has the
    /// key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.key()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Returns `true` if the tree holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.key)
    }

    /// The height of the whole tree: -1 when empty, 0 for a lone root.
    pub fn height(&self) -> isize {
        crate::node::height(self.root())
    }

    /// Gets the number of edges between the root and the given node.
    ///
    /// The node should come from this tree, e.g. from [`Tree::find`]. The
    /// search walks down from the root by key and only matches that exact
    /// node, so `None` is returned for `None`, for a node of another tree,
    /// or for a node that is no longer in this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(tree.find(&2)), Some(0));
    /// assert_eq!(tree.depth(tree.find(&3)), Some(1));
    /// assert_eq!(tree.depth(tree.find(&42)), None);
    ///
    /// let other = Tree::build([1, 2, 3]);
    /// assert_eq!(tree.depth(other.find(&3)), None);
    /// ```
    pub fn depth(&self, node: Option<&Node<K>>) -> Option<usize>
    where
        K: Ord,
    {
        let target = node?;
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            if ptr::eq(node, target) {
                return Some(depth);
            }
            current = match target.key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return None,
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        None
    }

    /// Returns `true` if, for every node, the heights of its left and right
    /// subtrees differ by at most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the tree from its keys so that it has minimal height. The
    /// result has the same shape as [`Tree::build`] gives for those keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=7 {
    ///     tree.insert(key).unwrap();
    /// }
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        let mut keys = Vec::with_capacity(self.len);
        drain_inorder(self.root.take(), &mut keys);
        self.len = keys.len();
        self.root = build_link(&mut keys.into_iter(), self.len);
    }
}

/// Builds a subtree from the next `len` keys of the sorted `keys`. The
/// `len / 2` keys before the middle one go to the left.
fn build_link<K, I>(keys: &mut I, len: usize) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    let left = build_link(keys, mid);
    let key = keys.next()?;
    let right = build_link(keys, len - mid - 1);

    Some(Box::new(Node { key, left, right }))
}

fn delete_link<K: Ord>(link: Link<K>, key: &K, len: &mut usize) -> Link<K> {
    let mut node = link?;
    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete_link(node.left.take(), key, len),
        Ordering::Greater => node.right = delete_link(node.right.take(), key, len),
        Ordering::Equal => {
            *len -= 1;
            match (node.left.take(), node.right.take()) {
                (None, right) => return right,
                (left, None) => return left,
                (Some(left), Some(right)) => {
                    let (successor, right) = delete_min(right);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = right;
                }
            }
        }
    }

    Some(node)
}

/// Removes the leftmost node of a subtree. Returns its key and the subtree
/// left behind, in which the removed node's right child took its place.
fn delete_min<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
        Some(left) => {
            let (min, left) = delete_min(left);
            node.left = left;
            (min, Some(node))
        }
    }
}

/// Moves every key of the subtree into `keys` in ascending order.
fn drain_inorder<K>(link: Link<K>, keys: &mut Vec<K>) {
    let mut stack = Vec::new();
    let mut current = link;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        let Some(node) = stack.pop() else {
            break;
        };
        let Node { key, right, .. } = *node;
        keys.push(key);
        current = right;
    }
}
