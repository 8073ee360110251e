use std::collections::HashMap;

use crate::node::Node;

/// Root-to-leaf path per symbol: `false` steps left, `true` steps right.
pub type CodeMap = HashMap<char, Vec<bool>>;

/// Extract the code map from a tree by depth-first traversal.
///
/// The accumulated path is cloned at every leaf so no two recorded codes
/// alias the working buffer. A bare-leaf root (single-symbol alphabet)
/// records the empty path. Absent children, which only occur on trees
/// rebuilt from a code map, are skipped; that is what makes extraction the
/// inverse of reconstruction.
pub fn code_from_tree(tree: &Node) -> CodeMap {
    let mut codes = CodeMap::new();
    let mut path = Vec::new();
    collect(tree, &mut path, &mut codes);
    codes
}

fn collect(node: &Node, path: &mut Vec<bool>, codes: &mut CodeMap) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, path.clone());
        }
        Node::Branch { left, right, .. } => {
            if let Some(left) = left {
                path.push(false);
                collect(left, path, codes);
                path.pop();
            }
            if let Some(right) = right {
                path.push(true);
                collect(right, path, codes);
                path.pop();
            }
        }
    }
}
