use bit_vec::BitVec;
use log::debug;

use crate::code::CodeMap;
use crate::node::Node;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The bits stepped somewhere the code map never defined.
    #[error("bit sequence walked off the coded tree")]
    InvalidPath,
    /// The bits ran out in the middle of a code.
    #[error("bit sequence ended in the middle of a code")]
    TruncatedInput,
}

/// Rebuild a structurally equivalent tree from a code map alone.
///
/// Frequencies are gone at this point and every label is zero; only the
/// shape matters. Each path is walked from a fresh root branch, creating
/// placeholder branches along the way and attaching the symbol's leaf at
/// the final direction. Prefix-freedom of the map guarantees no leaf is
/// ever overwritten, whatever order the entries come in.
///
/// Expects a prefix-free map, as produced by [`code_from_tree`].
///
/// [`code_from_tree`]: crate::code::code_from_tree
pub fn tree_from_code(code: &CodeMap) -> Node {
    let mut root = Node::placeholder();
    for (&symbol, path) in code {
        attach(&mut root, symbol, path);
    }
    root
}

fn attach(root: &mut Node, symbol: char, path: &[bool]) {
    let (&last, prefix) = match path.split_last() {
        Some(parts) => parts,
        // The degenerate single-symbol map carries an empty path; there is
        // no slot to hang its leaf on.
        None => return,
    };

    let mut current = root;
    for &direction in prefix {
        current = current
            .child_slot_mut(direction)
            .get_or_insert_with(|| Box::new(Node::placeholder()));
    }
    *current.child_slot_mut(last) = Some(Box::new(Node::leaf(symbol, 0)));
}

/// Decode a bit sequence against the tree rebuilt from `code`.
///
/// Walks left on `false` and right on `true`; landing on a leaf emits its
/// symbol and resets the walk to the root. The bits must end exactly on a
/// leaf, otherwise the sequence stopped mid-code.
pub fn decode(code: &CodeMap, bits: &BitVec) -> Result<String, DecodeError> {
    let root = tree_from_code(code);

    let mut decoded = String::new();
    let mut current = &root;
    for direction in bits.iter() {
        let child = match current {
            Node::Branch { left, right, .. } => {
                if direction {
                    right
                } else {
                    left
                }
            }
            Node::Leaf { .. } => return Err(DecodeError::InvalidPath),
        };
        current = match child {
            Some(node) => node,
            None => return Err(DecodeError::InvalidPath),
        };

        if let Node::Leaf { symbol, .. } = current {
            decoded.push(*symbol);
            current = &root;
        }
    }

    if !std::ptr::eq(current, &root) {
        return Err(DecodeError::TruncatedInput);
    }

    debug!("decoded {} bits into {} symbols", bits.len(), decoded.len());
    Ok(decoded)
}
