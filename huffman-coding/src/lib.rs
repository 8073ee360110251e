//! Huffman coding over in-memory symbol sequences.
//!
//! Encoding builds a frequency table, folds it into a tree by repeatedly
//! merging the two lowest-frequency nodes, and reads a prefix-free code map
//! off the tree. Decoding never sees the tree or the frequencies: it
//! rebuilds an equivalent tree from the code map alone and walks it bit by
//! bit.
//!
//! ```
//! use huffman_coding::{decode, encode};
//!
//! let encoding = encode("aabbbcccc")?.expect("input is not empty");
//! assert_eq!(decode(&encoding.code, &encoding.bits)?, "aabbbcccc");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Bits stay bits here: packing the sequence into bytes, or persisting it,
//! is a concern for the caller.

pub mod code;
pub mod decode;
pub mod encode;
pub mod frequency;
pub mod node;
pub mod queue;
pub mod tree;

pub use code::{code_from_tree, CodeMap};
pub use decode::{decode, tree_from_code, DecodeError};
pub use encode::{encode, EncodeError, Encoding};
pub use frequency::{frequency_table, FrequencyTable};
pub use node::Node;
pub use queue::NodeQueue;
pub use tree::tree_from_frequencies;
