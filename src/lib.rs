//! Parallel Huffman codec for in-memory text.
//!
//! Compresses a text buffer into a variable-length, prefix-free bit encoding derived
//! from symbol frequencies, and losslessly reconstructs it. Frequency counting,
//! codeword assignment and encoding are parallelized fork-join style with rayon.
//!
//! Basic usage:
//!
//! ```
//! use parhuff::HuffmanCodec;
//!
//! let mut codec = HuffmanCodec::build("What if the confident courage ate the win?", 4);
//! codec.count_frequencies().build_tree()?;
//! let bits = codec.encode()?;
//! assert_eq!(codec.decode(&bits)?, "What if the confident courage ate the win?");
//! # Ok::<(), parhuff::CodecError>(())
//! ```
//!
//! There is no container format: the encoded bits are only meaningful together with
//! the codec (and its tree) that produced them.
//!
pub mod bitstream;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::PackedBits;
pub use error::{CodecError, Result};
pub use huffman_coding::codec::{CodecConfig, HuffmanCodec, DEFAULT_THRESHOLD};
pub use huffman_coding::symbol_table::{FrequencyTable, SymbolEntry, SymbolLookup};
pub use huffman_coding::tree::{HuffmanTree, Node, NodeId, TreeStrategy};
pub use tools::freq_count::CountMode;
