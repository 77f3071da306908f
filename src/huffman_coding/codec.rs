//! `HuffmanCodec` ties the stages together for one text buffer.
//!
//! ```
//! use parhuff::HuffmanCodec;
//!
//! let mut codec = HuffmanCodec::build("abracadabra", 4);
//! codec.count_frequencies().build_tree()?;
//! let bits = codec.encode()?;
//! assert_eq!(codec.decode(&bits)?, "abracadabra");
//! # Ok::<(), parhuff::CodecError>(())
//! ```

use log::{info, warn};
use std::cmp::Ordering;

use super::codewords::assign_codewords;
use super::decode;
use super::encode;
use super::symbol_table::{FrequencyTable, SymbolLookup};
use super::tree::{HuffmanTree, TreeStrategy};
use crate::bitstream::PackedBits;
use crate::error::{CodecError, Result};
use crate::tools::freq_count::{freqs, CountMode};
use crate::tools::report::letter_table;

/// Sequential cutoff used when none is given.
pub const DEFAULT_THRESHOLD: usize = 4;

/// Tuning knobs. None of them change the encoded output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Ranges of at most this many symbols run inline; longer ones fork.
    pub threshold: usize,
    pub strategy: TreeStrategy,
    pub count_mode: CountMode,
    pub lookup: SymbolLookup,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            strategy: TreeStrategy::default(),
            count_mode: CountMode::default(),
            lookup: SymbolLookup::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(CodecError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Codec bound to one text buffer.
#[derive(Clone, Debug)]
pub struct HuffmanCodec {
    text: Vec<char>,
    config: CodecConfig,
    table: FrequencyTable,
    tree: Option<HuffmanTree>,
}

impl HuffmanCodec {
    /// Bind a codec to `text` with default settings and the given threshold.
    /// A threshold of zero is raised to one.
    pub fn build(text: &str, threshold: usize) -> Self {
        if threshold == 0 {
            warn!("Sequential threshold 0 raised to 1");
        }
        let config = CodecConfig {
            threshold: threshold.max(1),
            ..CodecConfig::new()
        };
        Self::bind(text, config)
    }

    /// Bind a codec to `text` with explicit settings.
    pub fn with_config(text: &str, config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::bind(text, config))
    }

    fn bind(text: &str, config: CodecConfig) -> Self {
        Self {
            text: text.chars().collect(),
            table: FrequencyTable::new(config.lookup),
            config,
            tree: None,
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Number of symbols in the bound text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    /// Codeword for `symbol`, once the tree is built.
    pub fn codeword(&self, symbol: char) -> Option<&str> {
        self.tree.as_ref()?;
        self.table.get(symbol).map(|e| e.codeword.as_str())
    }

    /// Count every symbol of the text and sort the table ascending by count.
    /// Any previously built tree is dropped, since its leaves refer to the old table.
    pub fn count_frequencies(&mut self) -> &mut Self {
        let c = &self.config;
        self.table = freqs(&self.text, c.threshold, c.count_mode, c.lookup);
        self.table.sort_by_count();
        self.tree = None;
        info!(
            "Counted {} distinct symbols in {} characters",
            self.table.len(),
            self.text.len()
        );
        self
    }

    /// Build the tree from the current table and assign codewords. On failure
    /// the codec keeps whatever tree and codewords it had.
    pub fn build_tree(&mut self) -> Result<&mut Self> {
        let tree = HuffmanTree::build(&self.table, self.config.strategy)?;
        assign_codewords(&tree, &mut self.table);
        info!(
            "Built tree: {} leaves, {} bits for the whole text",
            tree.leaf_count(),
            self.encoded_len(&tree)
        );
        self.tree = Some(tree);
        Ok(self)
    }

    /// Encode the bound text as a '0'/'1' string.
    pub fn encode(&self) -> Result<String> {
        self.built_tree()?;
        encode::encode(&self.text, &self.table, self.config.threshold)
    }

    /// Encode the bound text as packed bytes.
    pub fn encode_packed(&self) -> Result<PackedBits> {
        PackedBits::from_bit_string(&self.encode()?)
    }

    /// Decode a '0'/'1' string with the built tree. The result must hold as
    /// many symbols as the counted text.
    pub fn decode(&self, bits: &str) -> Result<String> {
        let decoded = decode::decode(bits, self.built_tree()?, &self.table)?;
        self.check_length(decoded, bits.len())
    }

    pub fn decode_packed(&self, bits: &PackedBits) -> Result<String> {
        let decoded = decode::decode_packed(bits, self.built_tree()?, &self.table)?;
        self.check_length(decoded, bits.bit_len())
    }

    /// Symbol / count / codeword listing of the table.
    pub fn display_table(&self) -> String {
        letter_table(&self.table)
    }

    fn built_tree(&self) -> Result<&HuffmanTree> {
        self.tree.as_ref().ok_or(CodecError::TreeNotBuilt)
    }

    fn check_length(&self, decoded: String, bits: usize) -> Result<String> {
        let expected = self.table.total();
        let count = decoded.chars().count() as u64;
        match count.cmp(&expected) {
            Ordering::Equal => Ok(decoded),
            Ordering::Less => Err(CodecError::Truncated {
                position: bits,
                decoded,
            }),
            Ordering::Greater => Err(CodecError::Overrun {
                expected,
                decoded: count,
            }),
        }
    }

    /// Encoded size in bits; the single-leaf code spends one bit per symbol.
    fn encoded_len(&self, tree: &HuffmanTree) -> u64 {
        if tree.is_single_leaf() {
            self.table.total()
        } else {
            tree.weighted_path_length()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scenario_aaab() {
        let mut codec = HuffmanCodec::build("aaab", 4);
        codec.count_frequencies().build_tree().unwrap();
        assert_eq!(codec.table().count_of('a'), 3);
        assert_eq!(codec.table().count_of('b'), 1);
        assert_eq!(codec.codeword('a').map(str::len), Some(1));
        assert_eq!(codec.codeword('b').map(str::len), Some(1));
        assert_ne!(codec.codeword('a'), codec.codeword('b'));
        let bits = codec.encode().unwrap();
        assert_eq!(bits.len(), 4);
        assert_eq!(codec.decode(&bits).unwrap(), "aaab");
    }

    #[test]
    fn scenario_single_symbol() {
        let mut codec = HuffmanCodec::build("zzzz", 4);
        codec.count_frequencies().build_tree().unwrap();
        assert_eq!(codec.table().len(), 1);
        let bits = codec.encode().unwrap();
        assert_eq!(bits, "0000");
        assert_eq!(codec.decode(&bits).unwrap(), "zzzz");
    }

    #[test]
    fn encode_before_tree_is_an_error() {
        let mut codec = HuffmanCodec::build("hello", 4);
        assert_eq!(codec.encode(), Err(CodecError::TreeNotBuilt));
        assert_eq!(codec.decode("0"), Err(CodecError::TreeNotBuilt));
        codec.count_frequencies();
        assert_eq!(codec.encode(), Err(CodecError::TreeNotBuilt));
        assert_eq!(codec.codeword('h'), None);
    }

    #[test]
    fn tree_before_counting_is_an_error() {
        let mut codec = HuffmanCodec::build("hello", 4);
        assert!(matches!(codec.build_tree(), Err(CodecError::EmptyTable)));
        assert!(codec.tree().is_none());
    }

    #[test]
    fn empty_text_cannot_build_a_tree() {
        let mut codec = HuffmanCodec::build("", 4);
        assert!(codec.is_empty());
        assert!(matches!(
            codec.count_frequencies().build_tree(),
            Err(CodecError::EmptyTable)
        ));
    }

    #[test]
    fn zero_threshold() {
        assert_eq!(HuffmanCodec::build("ab", 0).config().threshold, 1);
        let config = CodecConfig {
            threshold: 0,
            ..CodecConfig::default()
        };
        assert!(matches!(
            HuffmanCodec::with_config("ab", config),
            Err(CodecError::InvalidThreshold(0))
        ));
    }

    #[test]
    fn short_or_long_bits_are_rejected() {
        // a = "1", b = "0"
        let mut codec = HuffmanCodec::build("aaab", 4);
        codec.count_frequencies().build_tree().unwrap();
        assert_eq!(
            codec.decode("111"),
            Err(CodecError::Truncated {
                position: 3,
                decoded: "aaa".to_string()
            })
        );
        assert_eq!(
            codec.decode("11101"),
            Err(CodecError::Overrun {
                expected: 4,
                decoded: 5
            })
        );
        let packed = PackedBits::from_bit_string("111").unwrap();
        assert!(matches!(
            codec.decode_packed(&packed),
            Err(CodecError::Truncated { position: 3, .. })
        ));

        let mut single = HuffmanCodec::build("zzzz", 4);
        single.count_frequencies().build_tree().unwrap();
        assert_eq!(
            single.decode("000"),
            Err(CodecError::Truncated {
                position: 3,
                decoded: "zzz".to_string()
            })
        );
    }

    #[test]
    fn packed_round_trip() {
        let text = "packed bits are eight to a byte";
        let mut codec = HuffmanCodec::build(text, 3);
        codec.count_frequencies().build_tree().unwrap();
        let packed = codec.encode_packed().unwrap();
        assert_eq!(packed.bit_len(), codec.encode().unwrap().len());
        assert_eq!(codec.decode_packed(&packed).unwrap(), text);
    }

    #[test]
    fn display_lists_every_symbol() {
        let mut codec = HuffmanCodec::build("aab", 4);
        codec.count_frequencies().build_tree().unwrap();
        let shown = codec.display_table();
        assert!(shown.starts_with("Symbol"));
        assert_eq!(shown.lines().count(), 3);
    }
}
