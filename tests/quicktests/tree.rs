use rebalance_bst::Tree;

use std::collections::BTreeSet;

use crate::is_bst;

/// Builds a tree by inserting the keys one at a time. Unlike
/// [`Tree::build`] this keeps whatever shape the insertion order gives.
fn insert_all(xs: &[i16]) -> Tree<i16> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x).unwrap();
    }

    tree
}

#[quickcheck]
fn built_trees_are_balanced_bsts(xs: Vec<i16>) -> bool {
    let tree = Tree::build(xs);
    is_bst(&tree) && tree.is_balanced()
}

#[quickcheck]
fn build_keeps_each_key_once(xs: Vec<i16>) -> bool {
    let tree = Tree::build(xs.clone());
    let unique: BTreeSet<_> = xs.into_iter().collect();

    tree.len() == unique.len() && tree.inorder() == unique.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = insert_all(&xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    tree.inorder().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains_inserted(xs: Vec<i16>) -> bool {
    let tree = insert_all(&xs);
    is_bst(&tree) && xs.iter().all(|x| tree.find(x).map(|n| n.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
    let tree = insert_all(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = insert_all(&xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    // We may have inserted the same key multiple times - drop each one.
    still_present.retain(|x| !deletes.contains(x));

    is_bst(&tree)
        && deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn insert_then_delete_fresh_key(xs: Vec<i16>, k: i16) -> bool {
    let mut tree = insert_all(&xs);
    tree.delete(&k);
    let before = tree.inorder();

    tree.insert(k).unwrap();
    tree.delete(&k);

    is_bst(&tree) && tree.inorder() == before
}

#[quickcheck]
fn rebalance_keeps_keys(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = insert_all(&xs);
    for delete in &deletes {
        tree.delete(delete);
    }
    let before = tree.inorder();

    tree.rebalance();

    is_bst(&tree) && tree.is_balanced() && tree.inorder() == before
}

#[quickcheck]
fn rebalance_gives_built_shape(xs: Vec<i16>) -> bool {
    let mut tree = insert_all(&xs);
    tree.rebalance();

    tree.preorder() == Tree::build(xs).preorder()
}

#[quickcheck]
fn depth_of_every_node(xs: Vec<i16>) -> bool {
    let tree = insert_all(&xs);

    let mut depths = Vec::new();
    tree.level_order_with(|node| depths.push(tree.depth(Some(node))));

    // Level order never visits a shallower node after a deeper one.
    depths.iter().all(Option::is_some) && depths.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn height_bounds_depth(xs: Vec<i16>) -> bool {
    let tree = insert_all(&xs);

    let mut deepest = -1;
    tree.preorder_with(|node| {
        if node.is_leaf() {
            let depth = tree.depth(Some(node)).map_or(-1, |d| d as isize);
            deepest = deepest.max(depth);
        }
    });

    deepest == tree.height()
}
