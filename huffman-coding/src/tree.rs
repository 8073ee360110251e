use log::debug;

use crate::frequency::FrequencyTable;
use crate::node::Node;
use crate::queue::NodeQueue;

/// Build a Huffman tree by repeatedly merging the two lowest-frequency
/// nodes until one remains.
///
/// Leaves enter the queue in table iteration order. Each round dequeues two
/// nodes, puts the lighter one on the left (keeping the first-dequeued node
/// first when their frequencies tie) and enqueues the merged branch.
///
/// A single-entry table never enters the merge loop, so its tree is a bare
/// leaf with no enclosing branch. Returns `None` only for a table with no
/// entries, which the public pipeline already rules out.
pub fn tree_from_frequencies(table: &FrequencyTable) -> Option<Node> {
    let mut queue = NodeQueue::new();
    for (&symbol, &freq) in table.iter() {
        queue.enqueue(Node::leaf(symbol, freq));
    }

    while queue.len() > 1 {
        let first = queue.dequeue()?;
        let second = queue.dequeue()?;

        let (lo, hi) = if first.freq() > second.freq() {
            (second, first)
        } else {
            (first, second)
        };
        queue.enqueue(Node::merge(lo, hi));
    }

    let root = queue.dequeue();
    if let Some(root) = &root {
        debug!(
            "built tree over {} symbols, total weight {}",
            table.len(),
            root.freq()
        );
    }
    root
}

#[cfg(test)]
mod tests {
    use super::tree_from_frequencies;
    use crate::frequency::{frequency_table, FrequencyTable};
    use crate::node::Node;

    fn branch(left: Node, right: Node) -> Node {
        Node::merge(left, right)
    }

    /// Every branch's frequency equals the sum of its children's.
    fn assert_conserved(node: &Node) {
        if let Node::Branch {
            freq, left, right, ..
        } = node
        {
            let left = left.as_deref().expect("built trees have both children");
            let right = right.as_deref().expect("built trees have both children");
            assert_eq!(*freq, left.freq() + right.freq());
            assert_conserved(left);
            assert_conserved(right);
        }
    }

    #[test]
    fn groups_lightest_pair_first() {
        let table = frequency_table("aabbbcccc").unwrap();
        let tree = tree_from_frequencies(&table).unwrap();

        // a and b combine first (weight 5) and end up right of the root,
        // being heavier than c (weight 4).
        let expected = branch(
            Node::leaf('c', 4),
            branch(Node::leaf('a', 2), Node::leaf('b', 3)),
        );
        assert_eq!(tree, expected);
        assert_conserved(&tree);
    }

    #[test]
    fn equal_frequencies_resolve_by_arrival_order() {
        // All counts equal: the queue holds [c, b, a] (newest equal first),
        // so c and b merge first, then the pair joins a under the root.
        let table = frequency_table("abc").unwrap();
        let tree = tree_from_frequencies(&table).unwrap();

        let expected = branch(
            Node::leaf('a', 1),
            branch(Node::leaf('c', 1), Node::leaf('b', 1)),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn root_weight_is_the_input_length() {
        // Frequency mapping from the OpenDSA Huffman worked example.
        let char_mapping = [
            ('Z', 2),
            ('K', 7),
            ('M', 24),
            ('C', 32),
            ('U', 37),
            ('D', 42),
            ('L', 42),
            ('E', 120),
        ];
        let table: FrequencyTable = char_mapping.into_iter().collect();

        let tree = tree_from_frequencies(&table).unwrap();
        assert_eq!(tree.freq(), 306);
        assert_conserved(&tree);
    }

    #[test]
    fn single_entry_yields_a_bare_leaf() {
        let table = frequency_table("zzzz").unwrap();
        let tree = tree_from_frequencies(&table).unwrap();

        assert_eq!(tree, Node::leaf('z', 4));
    }

    #[test]
    fn empty_table_yields_no_tree() {
        assert_eq!(tree_from_frequencies(&FrequencyTable::new()), None);
    }
}
