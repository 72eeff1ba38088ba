use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};

/// Symbol to code mapping. Codes are strings over '0' and '1'.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Walks the tree from the root, appending '0' for left and '1' for right.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        build_codes_recursive(tree.root(), String::new(), &mut codes);
        CodeTable { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    pub fn code_lengths(&self) -> BTreeMap<char, usize> {
        self.codes.iter().map(|(&s, code)| (s, code.len())).collect()
    }

    /// Number of bits needed to encode a text with the given frequencies.
    /// Symbols missing from the table contribute nothing.
    pub fn weighted_length(&self, freq_map: &FrequencyTable) -> usize {
        freq_map
            .iter()
            .filter_map(|(symbol, count)| self.codes.get(symbol).map(|code| code.len() * count))
            .sum()
    }

    pub fn is_prefix_free(&self) -> bool {
        // In sorted order a code that prefixes others sorts right before one of them.
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Code to symbol view used by the decoder.
    pub fn inverted(&self) -> HashMap<&str, char> {
        self.codes
            .iter()
            .map(|(&symbol, code)| (code.as_str(), symbol))
            .collect()
    }
}

impl FromIterator<(char, String)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        CodeTable {
            codes: iter.into_iter().collect(),
        }
    }
}

fn build_codes_recursive(node: &HuffmanNode, prefix: String, codes: &mut BTreeMap<char, String>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            // A lone leaf is the root and has an empty path; it still needs a code.
            if prefix.is_empty() {
                codes.insert(*symbol, "0".to_string());
            } else {
                codes.insert(*symbol, prefix);
            }
        }
        HuffmanNode::Internal { left, right, .. } => {
            build_codes_recursive(right, format!("{prefix}1"), codes);
            build_codes_recursive(left, prefix + "0", codes);
        }
    }
}
