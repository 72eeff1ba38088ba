//! Huffman coding over text.
//!
//! Counts symbol frequencies, builds a Huffman tree with a min-priority
//! queue, derives a prefix-free code table from it, and encodes text into a
//! string of '0'/'1' characters that [`decode`] turns back into the text.
//!
//! ```
//! let encoded = huffcode::compress("aab")?;
//! assert_eq!(encoded.bits, "001");
//! assert_eq!(huffcode::decode(&encoded.bits, &encoded.table)?, "aab");
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```

pub mod codec;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod stats;
pub mod tree;

pub use codec::{Encoded, compress, decode, encode};
pub use codes::CodeTable;
pub use error::{HuffmanError, Result};
pub use frequency::{FrequencyTable, count_frequencies};
pub use stats::{CompressionStats, Report};
pub use tree::{HuffmanNode, HuffmanTree};
