use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    #[error("symbol {symbol:?} has no entry in the code table")]
    MissingCode { symbol: char },

    #[error("bitstream ends with unmatched bits {pending:?} starting at bit {position}")]
    MalformedBitstream { position: usize, pending: String },

    #[error("invalid bit {bit:?} at position {position}, expected '0' or '1'")]
    InvalidBit { bit: char, position: usize },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
