//! Error types shared by every stage of the codec.

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Failures the codec reports to its caller. None of them are fatal; the codec
/// is left in the state it had before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Tree construction was attempted on a table with no symbols.
    #[error("frequency table is empty; count frequencies before building the tree")]
    EmptyTable,

    /// Encode or decode was attempted before the tree was built.
    #[error("huffman tree has not been built")]
    TreeNotBuilt,

    /// The sequential cutoff must be at least one symbol.
    #[error("invalid sequential threshold {0}; must be at least 1")]
    InvalidThreshold(usize),

    /// A symbol being encoded was never seen while counting.
    #[error("symbol {symbol:?} at position {position} is not in the frequency table")]
    UnknownSymbol { symbol: char, position: usize },

    /// A bit-string contained something other than '0' or '1', or took a
    /// branch the tree does not have.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },

    /// The bit-string ended part way down the tree, or before every symbol of
    /// the bound text was recovered. `decoded` holds the symbols recovered
    /// before the cut.
    #[error("bit-string ends early after {position} bits")]
    Truncated { position: usize, decoded: String },

    /// The bit-string decoded to more symbols than the bound text holds.
    #[error("bit-string decodes to {decoded} symbols but the text has {expected}")]
    Overrun { expected: u64, decoded: u64 },

    /// A packed buffer is shorter than the bit length it claims.
    #[error("packed data holds {available} bits but {claimed} were claimed")]
    PackedLength { claimed: usize, available: usize },
}
