
use crate::node::Node;
use crate::tree::Tree;

/// Asserts that every key in the tree lies strictly between the keys of
/// the ancestors it hangs under, and that `len` counts every node.
pub(crate) fn assert_bst<K: Ord + std::fmt::Debug>(tree: &Tree<K>) {
    fn check<'a, K: Ord + std::fmt::Debug>(
        node: Option<&'a Node<K>>,
        lower: Option<&'a K>,
        upper: Option<&'a K>,
    ) -> usize {
        let Some(node) = node else {
            return 0;
        };
        if let Some(lower) = lower {
            assert!(lower < node.key(), "{:?} is not above {:?}", node.key(), lower);
        }
        if let Some(upper) = upper {
            assert!(node.key() < upper, "{:?} is not below {:?}", node.key(), upper);
        }

        1 + check(node.left(), lower, Some(node.key()))
            + check(node.right(), Some(node.key()), upper)
    }

    assert_eq!(check(tree.root(), None, None), tree.len());
}
