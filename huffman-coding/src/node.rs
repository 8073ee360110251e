/// A node of a Huffman tree, labelled by frequency.
///
/// Children are optional because a tree rebuilt from a code map may leave a
/// side unpopulated (a prefix-free map such as `{a: [false]}` never touches
/// the right of the root). Trees built from a frequency table always carry
/// both children on every branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        freq: usize,
    },
    Branch {
        freq: usize,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
}

impl Node {
    pub fn leaf(symbol: char, freq: usize) -> Self {
        Node::Leaf { symbol, freq }
    }

    /// An internal node with no children yet, used while rebuilding a tree
    /// from a code map.
    pub(crate) fn placeholder() -> Self {
        Node::Branch {
            freq: 0,
            left: None,
            right: None,
        }
    }

    pub fn freq(&self) -> usize {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Branch { freq, .. } => *freq,
        }
    }

    /// Combine two nodes under a new branch labelled with their summed
    /// frequency. `lo` becomes the left child.
    pub fn merge(lo: Node, hi: Node) -> Self {
        Node::Branch {
            freq: lo.freq() + hi.freq(),
            left: Some(Box::new(lo)),
            right: Some(Box::new(hi)),
        }
    }

    /// The child slot reached by `direction` (`false` = left, `true` = right).
    ///
    /// Only branches have child slots; callers walk paths that come from a
    /// prefix-free code map, which never routes through a leaf.
    pub(crate) fn child_slot_mut(&mut self, direction: bool) -> &mut Option<Box<Node>> {
        match self {
            Node::Branch { left, right, .. } => {
                if direction {
                    right
                } else {
                    left
                }
            }
            Node::Leaf { .. } => {
                unreachable!("a prefix-free code never routes through a leaf")
            }
        }
    }
}
