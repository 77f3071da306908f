//! The tools module provides the helpers around the Huffman codec.
//!
//! The tools are:
//! - cli: Command line interface for the demo binary.
//! - fork_join: Recursive range splitting with a sequential cutoff, on rayon.
//! - freq_count: Frequency count of the input text.
//! - report: Printable symbol table.
//! - word_gen: Random paragraphs to feed the codec.
//!
pub mod cli;
pub mod fork_join;
pub mod freq_count;
pub mod report;
pub mod word_gen;
