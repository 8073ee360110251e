use bit_vec::BitVec;
use log::debug;

use crate::code::{code_from_tree, CodeMap};
use crate::frequency::frequency_table;
use crate::tree::tree_from_frequencies;

/// The durable output of encoding: the code map travels with the bits
/// because no tree or frequency metadata is persisted anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    pub code: CodeMap,
    pub bits: BitVec,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EncodeError {
    /// An input symbol has no entry in the code map. Cannot happen when the
    /// map was derived from the same input, but must never be papered over
    /// with an empty substitute path.
    #[error("symbol {0:?} has no entry in the code map")]
    MissingCode(char),
}

/// Encode `input` as a code map plus the concatenation of each input
/// symbol's path, in input order.
///
/// Returns `Ok(None)` for empty input, mirroring the frequency analyzer's
/// no-data sentinel.
pub fn encode(input: &str) -> Result<Option<Encoding>, EncodeError> {
    let table = match frequency_table(input) {
        Some(table) => table,
        None => return Ok(None),
    };
    let tree = match tree_from_frequencies(&table) {
        Some(tree) => tree,
        None => return Ok(None),
    };
    let code = code_from_tree(&tree);

    let bits = bits_for(input, &code)?;
    debug!(
        "encoded {} symbols into {} bits over a {}-entry code",
        input.chars().count(),
        bits.len(),
        code.len()
    );

    Ok(Some(Encoding { code, bits }))
}

fn bits_for(input: &str, code: &CodeMap) -> Result<BitVec, EncodeError> {
    let mut bits = BitVec::new();
    for symbol in input.chars() {
        let path = code.get(&symbol).ok_or(EncodeError::MissingCode(symbol))?;
        bits.extend(path.iter().copied());
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use bit_vec::BitVec;

    use super::{bits_for, encode, EncodeError};
    use crate::code::CodeMap;

    fn bitvec(bits: &[u8]) -> BitVec {
        bits.iter().map(|&b| b == 1).collect()
    }

    #[test]
    fn concatenates_paths_in_input_order() {
        let encoding = encode("aabbbcccc").unwrap().unwrap();

        // c = 0, a = 10, b = 11.
        assert_eq!(
            encoding.bits,
            bitvec(&[1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0])
        );
    }

    #[test]
    fn empty_input_propagates_the_no_data_sentinel() {
        assert_eq!(encode(""), Ok(None));
    }

    #[test]
    fn single_symbol_input_encodes_to_zero_bits() {
        // A one-symbol alphabet gets the empty path, so the bit sequence
        // carries no length information at all. Known limitation of the
        // scheme, asserted exactly.
        let encoding = encode("zzzz").unwrap().unwrap();

        assert_eq!(encoding.code.len(), 1);
        assert_eq!(encoding.code[&'z'], Vec::<bool>::new());
        assert_eq!(encoding.bits.len(), 0);
    }

    #[test]
    fn missing_code_entry_is_surfaced() {
        let mut code = CodeMap::new();
        code.insert('a', vec![false]);

        assert_eq!(bits_for("ab", &code), Err(EncodeError::MissingCode('b')));
    }
}
