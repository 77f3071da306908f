//! BitReader: walks a packed buffer one bit at a time, MSB first.
//!
//! Reading stops at the bit length given at construction, so the zero padding
//! of the final byte is never returned.

const BIT_MASK: u8 = 0xff;

#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    /// `bit_len` is clamped to what `buffer` can hold.
    pub fn new(buffer: &'a [u8], bit_len: usize) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            bit_len: bit_len.min(buffer.len() * 8),
        }
    }

    /// Bits consumed so far.
    pub fn bits_read(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Bits left to read.
    pub fn remaining(&self) -> usize {
        self.bit_len - self.bits_read()
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.bits_read() >= self.bit_len {
            return None;
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bool_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for BitReader<'_> {}
