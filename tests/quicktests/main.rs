#[macro_use]
extern crate quickcheck_macros;

mod tree;

use rebalance_bst::{Node, Tree};

/// Checks the search tree ordering below `node`: every key lies strictly
/// between `lower` and `upper`. Returns how many nodes were checked.
fn ordered_within(
    node: Option<&Node<i16>>,
    lower: Option<i16>,
    upper: Option<i16>,
) -> Option<usize> {
    let Some(node) = node else {
        return Some(0);
    };
    let key = *node.key();
    if lower.is_some_and(|lower| lower >= key) || upper.is_some_and(|upper| key >= upper) {
        return None;
    }

    let left = ordered_within(node.left(), lower, Some(key))?;
    let right = ordered_within(node.right(), Some(key), upper)?;
    Some(1 + left + right)
}

/// Returns `true` if the tree satisfies the search tree ordering and its
/// `len` matches its node count.
pub(crate) fn is_bst(tree: &Tree<i16>) -> bool {
    ordered_within(tree.root(), None, None) == Some(tree.len())
}
