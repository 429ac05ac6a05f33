use std::cmp;

/// An owning link to an optional subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` holds a key and owns its (possibly empty) left and right
/// subtrees. A `Node` is only ever reachable through its parent so the tree
/// never shares nodes or contains cycles.
///
/// `Node`s compare by key. Two nodes of different trees can be equal, so
/// `==` says nothing about where a node sits; [`Tree::depth`] matches the
/// exact node instead.
///
/// [`Tree::depth`]: crate::Tree::depth
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub(crate) fn boxed(key: K) -> Box<Self> {
        Box::new(Self::new(key))
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a
    /// leaf. A leaf has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 2);
    /// assert_eq!(root.right().unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        1 + cmp::max(height(self.left()), height(self.right()))
    }

    /// Returns `true` if the subtree rooted at this node is balanced: for
    /// every node in it, the heights of the left and right subtrees differ
    /// by at most one.
    pub fn is_balanced(&self) -> bool {
        balanced_height(Some(self)).is_some()
    }
}

/// Gets the height of a subtree in one pass, or `None` as soon as any node
/// in it is found to be unbalanced.
fn balanced_height<K>(node: Option<&Node<K>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;

    ((left - right).abs() <= 1).then_some(1 + cmp::max(left, right))
}

/// Gets the height of a possibly absent node. An absent node has a height
/// of -1 so that a leaf has a height of 0.
///
/// # Examples
///
/// ```
/// use rebalance_bst::{height, Tree};
///
/// let tree = Tree::<i32>::new();
/// assert_eq!(height(tree.root()), -1);
///
/// let tree = Tree::build([7]);
/// assert_eq!(height(tree.root()), 0);
/// ```
pub fn height<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(-1, Node::height)
}

impl<K: PartialEq> PartialEq for Node<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq> Eq for Node<K> {}

impl<K: PartialOrd> PartialOrd for Node<K> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord> Ord for Node<K> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.key.cmp(&other.key)
    }
}
