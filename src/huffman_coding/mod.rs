//! The huffman module compresses a text buffer into a prefix-free bit encoding and
//! restores it.
//!
//! The stages run in a fixed order for each buffer:
//! - Frequency count: one table entry per distinct symbol (see tools::freq_count).
//! - Tree build: the table, sorted ascending by count, becomes a Huffman tree.
//! - Codeword assignment: each leaf's root-to-leaf path is written into its entry.
//! - Encode: every symbol is replaced by its codeword, in input order.
//! - Decode: the tree is walked bit by bit, emitting a symbol at each leaf.
//!
//! Counting, codeword assignment and encoding split their work fork-join style above
//! a sequential threshold. The threshold only affects speed: output is identical for
//! every threshold.
//!
//! `codec::HuffmanCodec` drives the stages for one buffer.

pub mod codec;
pub mod codewords;
pub mod decode;
pub mod encode;
pub mod symbol_table;
pub mod tree;
