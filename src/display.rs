//! Renders a [`Tree`] as a sideways diagram: the root sits at the left
//! margin, right subtrees above their parent and left subtrees below.
//!
//! ```text
//! │       ┌── 7
//! │   ┌── 6
//! │   │   └── 5
//! └── 4
//!     │   ┌── 3
//!     └── 2
//!         └── 1
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes one line per node of the subtree. `is_left` is `true` for the
/// root and for left children.
fn write_node<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<K>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let prefix = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        write_node(f, right, &prefix, false)?;
    }

    let branch = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{branch}{}", node.key())?;

    if let Some(left) = node.left() {
        let prefix = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        write_node(f, left, &prefix, true)?;
    }

    Ok(())
}
