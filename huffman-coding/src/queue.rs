use std::collections::VecDeque;

use crate::node::Node;

/// A queue of tree nodes kept in ascending order of frequency.
///
/// Insertion is positional: a new node lands just before the first resident
/// node of equal or greater frequency. Among equal frequencies the newest
/// arrival therefore sits in front of the older ones; that tie-break decides
/// which nodes merge first, and with it the final tree shape.
#[derive(Debug, Default)]
pub struct NodeQueue {
    nodes: VecDeque<Node>,
}

impl NodeQueue {
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, node: Node) {
        let at = self
            .nodes
            .iter()
            .position(|resident| resident.freq() >= node.freq())
            .unwrap_or(self.nodes.len());
        self.nodes.insert(at, node);
    }

    /// Remove and return the lowest-frequency node, `None` when empty.
    pub fn dequeue(&mut self) -> Option<Node> {
        self.nodes.pop_front()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
