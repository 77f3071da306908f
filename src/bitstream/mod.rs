//! The bitstream module packs codec output into bytes and reads it back.
//!
//! The codec itself works on strings of '0' and '1' characters, which is easy to
//! inspect but costs a byte per bit. `BitWriter` packs such a string most
//! significant bit first, and `BitReader` walks the packed bytes bit by bit,
//! stopping at the recorded bit length so the pad bits of the last byte are
//! never read as data.
//!
//! There is no header or framing here: the bit length travels alongside the
//! bytes in `PackedBits`.
pub mod bitreader;
pub mod bitwriter;

use crate::error::{CodecError, Result};

/// Packed bits, MSB first, with the number of meaningful bits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackedBits {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl PackedBits {
    /// Wrap bytes produced elsewhere. Fails if `bytes` cannot hold `bit_len` bits.
    pub fn new(bytes: Vec<u8>, bit_len: usize) -> Result<Self> {
        let available = bytes.len() * 8;
        if bit_len > available {
            return Err(CodecError::PackedLength {
                claimed: bit_len,
                available,
            });
        }
        Ok(Self { bytes, bit_len })
    }

    /// Pack a string of '0'/'1' characters.
    pub fn from_bit_string(bits: &str) -> Result<Self> {
        let mut bw = bitwriter::BitWriter::with_capacity(bits.len());
        bw.out_str(bits)?;
        Ok(bw.finish())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    pub fn reader(&self) -> bitreader::BitReader<'_> {
        bitreader::BitReader::new(&self.bytes, self.bit_len)
    }

    /// Unpack back to a '0'/'1' string.
    pub fn to_bit_string(&self) -> String {
        self.reader().map(|b| if b { '1' } else { '0' }).collect()
    }
}
