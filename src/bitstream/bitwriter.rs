use super::PackedBits;
use crate::error::{CodecError, Result};

/// Packs bits MSB first into a byte buffer.
pub struct BitWriter {
    /// Output buffer of completed bytes.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Total bits written so far.
    bits: usize,
}

impl BitWriter {
    /// Create a new BitWriter with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            output: Vec::with_capacity(bits / 8 + 1),
            queue: 0,
            q_bits: 0,
            bits: 0,
        }
    }

    /// Number of bits written so far.
    pub fn loc(&self) -> usize {
        self.bits
    }

    /// Internal bitstream write function common to all out functions.
    fn push_queue(&mut self) {
        // If the queue has less than 8 bits left, write all full bytes to the output buffer.
        if self.q_bits > 56 {
            while self.q_bits > 7 {
                let byte = (self.queue >> (self.q_bits - 8)) as u8;
                self.output.push(byte); //push the packed byte out
                self.q_bits -= 8; //adjust the count of bits left in the queue
            }
        }
    }

    /// Put a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.push_queue();
        self.queue = (self.queue << 1) | bit as u64;
        self.q_bits += 1;
        self.bits += 1;
    }

    /// Put a string of '0'/'1' characters on the stream. Anything else is an
    /// `InvalidBit`; bits before it stay written.
    pub fn out_str(&mut self, bits: &str) -> Result<()> {
        let start = self.bits;
        for (i, c) in bits.chars().enumerate() {
            match c {
                '0' => self.out_bit(false),
                '1' => self.out_bit(true),
                found => {
                    return Err(CodecError::InvalidBit {
                        position: start + i,
                        found,
                    })
                }
            }
        }
        Ok(())
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits.
    fn flush(&mut self) {
        // First push out all the full bytes
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        // Then push out the remaining bits
        if self.q_bits > 0 {
            let mut byte = (self.queue & (0xff >> (8 - self.q_bits)) as u64) as u8;
            byte <<= 8 - self.q_bits;
            self.output.push(byte);
            self.q_bits = 0;
        }
    }

    /// Flush and hand back the packed bits.
    pub fn finish(mut self) -> PackedBits {
        self.flush();
        PackedBits {
            bytes: self.output,
            bit_len: self.bits,
        }
    }
}
