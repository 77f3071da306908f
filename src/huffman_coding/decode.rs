use log::debug;

use super::symbol_table::FrequencyTable;
use super::tree::{HuffmanTree, Node};
use crate::bitstream::PackedBits;
use crate::error::{CodecError, Result};

/// Decode a string of '0'/'1' characters.
pub fn decode(bits: &str, tree: &HuffmanTree, table: &FrequencyTable) -> Result<String> {
    decode_bits(bits.chars(), tree, table)
}

/// Decode packed bits.
pub fn decode_packed(bits: &PackedBits, tree: &HuffmanTree, table: &FrequencyTable) -> Result<String> {
    decode_bits(
        bits.reader().map(|b| if b { '1' } else { '0' }),
        tree,
        table,
    )
}

/// Walk the tree one bit at a time, emitting a symbol at every leaf and going
/// back to the root. The input must end exactly on a leaf.
pub fn decode_bits<I>(bits: I, tree: &HuffmanTree, table: &FrequencyTable) -> Result<String>
where
    I: IntoIterator<Item = char>,
{
    let root = tree.root();
    let mut out = String::new();

    // A lone leaf is coded as a single '0' per symbol.
    if let Node::Leaf { entry, .. } = *tree.node(root) {
        let symbol = table.entry(entry).symbol;
        for (position, bit) in bits.into_iter().enumerate() {
            match bit {
                '0' => out.push(symbol),
                found => return Err(CodecError::InvalidBit { position, found }),
            }
        }
        return Ok(out);
    }

    // `cursor` is always an internal node: leaves are emitted as soon as they
    // are reached.
    let mut cursor = root;
    let mut read = 0;
    for (position, bit) in bits.into_iter().enumerate() {
        let next = match (bit, *tree.node(cursor)) {
            ('0', Node::Internal { left, .. }) => left,
            ('1', Node::Internal { right, .. }) => right,
            (found, _) => return Err(CodecError::InvalidBit { position, found }),
        };
        cursor = match *tree.node(next) {
            Node::Leaf { entry, .. } => {
                out.push(table.entry(entry).symbol);
                root
            }
            Node::Internal { .. } => next,
        };
        read = position + 1;
    }

    if cursor != root {
        return Err(CodecError::Truncated {
            position: read,
            decoded: out,
        });
    }
    debug!("Decoded {} bits into {} symbols", read, out.chars().count());
    Ok(out)
}
