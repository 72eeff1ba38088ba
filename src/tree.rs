use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Write;

use tracing::debug;

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: char,
        weight: usize,
    },
    Internal {
        weight: usize,
        // Concatenated child labels, left then right. Only used for display.
        label: String,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn leaf(symbol: char, weight: usize) -> Self {
        HuffmanNode::Leaf { symbol, weight }
    }

    /// Joins two nodes under a new parent. `first` is the node removed from
    /// the queue first and becomes the right child.
    pub fn merge(first: Self, second: Self) -> Self {
        let weight = first.weight() + second.weight();
        let label = format!("{}{}", second.label(), first.label());
        HuffmanNode::Internal {
            weight,
            label,
            left: Box::new(second),
            right: Box::new(first),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn label(&self) -> String {
        match self {
            HuffmanNode::Leaf { symbol, .. } => symbol.to_string(),
            HuffmanNode::Internal { label, .. } => label.clone(),
        }
    }
}

// Min-heap entry for BinaryHeap. Ties on weight pop in insertion order.
#[derive(Debug)]
struct QueueEntry {
    seq: usize,
    node: HuffmanNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node.weight() == other.node.weight() && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .weight()
            .cmp(&self.node.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    pub fn from_frequencies(freq_map: &FrequencyTable) -> Result<Self> {
        if freq_map.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let mut leaves: Vec<(char, usize)> = freq_map.iter().map(|(&s, &w)| (s, w)).collect();
        leaves.sort_unstable();

        let mut heap = BinaryHeap::with_capacity(leaves.len());
        let mut seq = 0;
        for (symbol, weight) in leaves {
            heap.push(QueueEntry {
                seq,
                node: HuffmanNode::leaf(symbol, weight),
            });
            seq += 1;
        }

        let root = loop {
            let first = heap.pop().ok_or(HuffmanError::EmptyInput)?;
            let Some(second) = heap.pop() else {
                break first.node;
            };
            heap.push(QueueEntry {
                seq,
                node: HuffmanNode::merge(first.node, second.node),
            });
            seq += 1;
        };

        debug!(weight = root.weight(), symbols = freq_map.len(), "built huffman tree");
        Ok(HuffmanTree { root })
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Total weight, equal to the length of the counted text.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        fn count(node: &HuffmanNode) -> usize {
            match node {
                HuffmanNode::Leaf { .. } => 1,
                HuffmanNode::Internal { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }

    pub fn depth(&self) -> usize {
        fn depth(node: &HuffmanNode) -> usize {
            match node {
                HuffmanNode::Leaf { .. } => 0,
                HuffmanNode::Internal { left, right, .. } => 1 + depth(left).max(depth(right)),
            }
        }
        depth(&self.root)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        render_node(&self.root, 0, "root", &mut out);
        out
    }
}

fn render_node(node: &HuffmanNode, depth: usize, edge: &str, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        HuffmanNode::Leaf { symbol, weight } => {
            let _ = writeln!(out, "{indent}{edge} -> leaf {symbol:?} [weight: {weight}]");
        }
        HuffmanNode::Internal {
            weight,
            label,
            left,
            right,
        } => {
            let _ = writeln!(out, "{indent}{edge} -> {label:?} [weight: {weight}]");
            render_node(left, depth + 1, "0", out);
            render_node(right, depth + 1, "1", out);
        }
    }
}
