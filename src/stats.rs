use std::fmt;

use chrono::Utc;
use serde::Serialize;

use crate::codes::CodeTable;

/// Bits per symbol in the naive fixed-width baseline.
pub const BASELINE_BITS_PER_SYMBOL: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressionStats {
    pub compressed_bits: usize,
    pub original_bits: usize,
    pub ratio: f64,
}

impl CompressionStats {
    pub fn new(text: &str, bits: &str) -> Self {
        let compressed_bits = bits.len();
        let original_bits = text.chars().count() * BASELINE_BITS_PER_SYMBOL;
        let ratio = if original_bits == 0 {
            0.0
        } else {
            compressed_bits as f64 / original_bits as f64
        };
        CompressionStats {
            compressed_bits,
            original_bits,
            ratio,
        }
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "compressed size: {} bits, original size: {} bits, compression ratio: {:.4}",
            self.compressed_bits, self.original_bits, self.ratio
        )
    }
}

/// Everything one run produces, as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub timestamp: String,
    pub original: String,
    pub encoded: String,
    pub table: CodeTable,
    pub decoded: String,
    pub stats: CompressionStats,
}

impl Report {
    pub fn new(original: &str, encoded: String, table: CodeTable, decoded: String) -> Self {
        let stats = CompressionStats::new(original, &encoded);
        Report {
            timestamp: Utc::now().to_rfc3339(),
            original: original.to_string(),
            encoded,
            table,
            decoded,
            stats,
        }
    }

    pub fn round_trip_ok(&self) -> bool {
        self.original == self.decoded
    }
}
