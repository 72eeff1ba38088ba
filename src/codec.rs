use serde::Serialize;
use tracing::{debug, warn};

use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::frequency::count_frequencies;
use crate::tree::HuffmanTree;

/// A bitstring together with the table needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoded {
    pub bits: String,
    pub table: CodeTable,
}

/// Counts, builds the tree, derives the code table and encodes `text` with it.
pub fn compress(text: &str) -> Result<Encoded> {
    let freq_map = count_frequencies(text);
    let tree = HuffmanTree::from_frequencies(&freq_map)?;
    let table = CodeTable::from_tree(&tree);
    debug!(symbols = table.len(), depth = tree.depth(), "derived code table");

    let bits = encode(text, &table)?;
    Ok(Encoded { bits, table })
}

pub fn encode(text: &str, table: &CodeTable) -> Result<String> {
    let mut encoded = String::new();
    for symbol in text.chars() {
        let code = table
            .get(symbol)
            .ok_or(HuffmanError::MissingCode { symbol })?;
        encoded.push_str(code);
    }
    debug!(input_chars = text.chars().count(), bits = encoded.len(), "encoded text");
    Ok(encoded)
}

/// Greedy decode: emits a symbol as soon as the pending bits match a code.
/// Unmatched bits left at the end are an error, never silently dropped.
pub fn decode(bits: &str, table: &CodeTable) -> Result<String> {
    let reverse = table.inverted();
    let mut decoded = String::new();
    let mut current = String::new();
    let mut start = 0;

    for (position, bit) in bits.chars().enumerate() {
        if bit != '0' && bit != '1' {
            warn!(position, ?bit, "invalid bit in encoded input");
            return Err(HuffmanError::InvalidBit { bit, position });
        }
        current.push(bit);
        if let Some(&symbol) = reverse.get(current.as_str()) {
            decoded.push(symbol);
            current.clear();
            start = position + 1;
        }
    }

    if !current.is_empty() {
        warn!(position = start, pending = %current, "encoded input ends mid-code");
        return Err(HuffmanError::MalformedBitstream {
            position: start,
            pending: current,
        });
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aab_encodes_to_three_bits() {
        let encoded = compress("aab").unwrap();
        assert_eq!(encoded.bits, "001");
        assert_eq!(decode(&encoded.bits, &encoded.table).unwrap(), "aab");
    }

    #[test]
    fn single_symbol_round_trips() {
        let encoded = compress("aaaa").unwrap();
        assert_eq!(encoded.table.len(), 1);
        assert_eq!(encoded.bits, "0000");
        assert_eq!(decode(&encoded.bits, &encoded.table).unwrap(), "aaaa");
    }

    #[test]
    fn tied_weights_round_trip() {
        let encoded = compress("abcabc").unwrap();
        assert_eq!(encoded.table.len(), 3);
        assert!(encoded.table.is_prefix_free());
        assert_eq!(encoded.bits.len(), 10);
        assert_eq!(decode(&encoded.bits, &encoded.table).unwrap(), "abcabc");
    }

    #[test]
    fn encoded_length_is_sum_of_code_lengths() {
        let text = "she sells sea shells";
        let encoded = compress(text).unwrap();
        let expected: usize = text
            .chars()
            .map(|c| encoded.table.get(c).unwrap().len())
            .sum();
        assert_eq!(encoded.bits.len(), expected);
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(compress(""), Err(HuffmanError::EmptyInput));
    }

    #[test]
    fn missing_symbol_is_reported() {
        let table = compress("aab").unwrap().table;
        assert_eq!(
            encode("abc", &table),
            Err(HuffmanError::MissingCode { symbol: 'c' })
        );
    }

    #[test]
    fn trailing_unmatched_bit_is_malformed() {
        let table: CodeTable = [('a', "0".to_string()), ('b', "10".to_string())]
            .into_iter()
            .collect();
        assert_eq!(decode("0100", &table).unwrap(), "aba");
        assert_eq!(
            decode("01001", &table),
            Err(HuffmanError::MalformedBitstream {
                position: 4,
                pending: "1".to_string(),
            })
        );
    }

    #[test]
    fn non_binary_character_is_rejected() {
        let table = compress("aab").unwrap().table;
        assert_eq!(
            decode("01x", &table),
            Err(HuffmanError::InvalidBit { bit: 'x', position: 2 })
        );
    }

    #[test]
    fn empty_bitstring_decodes_to_empty_text() {
        let table = compress("aab").unwrap().table;
        assert_eq!(decode("", &table).unwrap(), "");
    }
}
