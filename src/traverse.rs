//! Breadth-first and depth-first traversals of a [`Tree`].
//!
//! Every order comes as a pair. The `*_with` method calls a visitor once for
//! each node in that order and the plain method collects the keys in that
//! order instead. Traversing an empty tree visits nothing and collects an
//! empty `Vec`.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! //   2
//! //  / \
//! // 1   3
//! let tree = Tree::build([1, 2, 3]);
//!
//! assert_eq!(tree.level_order(), vec![2, 1, 3]);
//! assert_eq!(tree.preorder(), vec![2, 1, 3]);
//! assert_eq!(tree.inorder(), vec![1, 2, 3]);
//! assert_eq!(tree.postorder(), vec![1, 3, 2]);
//!
//! let mut leaves = Vec::new();
//! tree.inorder_with(|node| {
//!     if node.is_leaf() {
//!         leaves.push(*node.key());
//!     }
//! });
//! assert_eq!(leaves, vec![1, 3]);
//! ```

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

impl<K> Tree<K> {
    /// Visits the nodes level by level from the root down, each level from
    /// left to right.
    pub fn level_order_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        let mut queue: VecDeque<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Collects the keys level by level from the root down.
    pub fn level_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        self.level_order_with(|node| keys.push(node.key().clone()));
        keys
    }

    /// Visits the left subtree, then the node, then the right subtree. This
    /// visits the nodes in ascending key order.
    pub fn inorder_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        depth_first(self.root(), Visit::Between, &mut visit);
    }

    /// Collects the keys in ascending order.
    pub fn inorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        self.inorder_with(|node| keys.push(node.key().clone()));
        keys
    }

    /// Visits the node, then the left subtree, then the right subtree.
    pub fn preorder_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        depth_first(self.root(), Visit::Before, &mut visit);
    }

    /// Collects the keys with every node before its subtrees.
    pub fn preorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        self.preorder_with(|node| keys.push(node.key().clone()));
        keys
    }

    /// Visits the left subtree, then the right subtree, then the node.
    pub fn postorder_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        depth_first(self.root(), Visit::After, &mut visit);
    }

    /// Collects the keys with every node after its subtrees.
    pub fn postorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        self.postorder_with(|node| keys.push(node.key().clone()));
        keys
    }
}

/// Where a node sits in the order relative to its subtrees.
#[derive(Clone, Copy)]
enum Visit {
    Before,
    Between,
    After,
}

/// Walks the subtree depth first with an explicit stack, calling `visit` on
/// each node at the point `order` puts it relative to its subtrees.
fn depth_first<'a, K>(
    root: Option<&'a Node<K>>,
    order: Visit,
    visit: &mut impl FnMut(&Node<K>),
) {
    // `true` marks a node whose children are already on the stack.
    let mut stack: Vec<(&'a Node<K>, bool)> = root.map(|n| (n, false)).into_iter().collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            visit(node);
            continue;
        }

        // Pushed in reverse since the last one pushed is visited first.
        let right = node.right().map(|n| (n, false));
        let left = node.left().map(|n| (n, false));
        match order {
            Visit::Before => {
                stack.extend(right);
                stack.extend(left);
                stack.push((node, true));
            }
            Visit::Between => {
                stack.extend(right);
                stack.push((node, true));
                stack.extend(left);
            }
            Visit::After => {
                stack.push((node, true));
                stack.extend(right);
                stack.extend(left);
            }
        }
    }
}
