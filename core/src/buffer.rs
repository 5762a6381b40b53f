//! Owned growable byte buffer with bit-range and text-codec helpers.
//!
//! All accessors are bounds-checked and total: reads past the end yield
//! zeros, writes past the end are dropped, and ranged copies clamp to
//! the overlap. The one fallible operation is base64 decoding, which
//! surfaces the codec's error.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bit-range reads and writes move through at most one `u32` at a time.
const MAX_BIT_RANGE: usize = 32;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("invalid base64 data: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A dynamically sized, owned byte sequence.
///
/// Growth always zero-initializes the new tail, so the contents are
/// fully defined after every operation.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-filled buffer of `size` bytes.
    pub fn with_size(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Byte at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// Store `value` at `index`. Returns false (and drops the write)
    /// past the end.
    pub fn set(&mut self, index: usize, value: u8) -> bool {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Resize to exactly `new_size` bytes: shrinking truncates, growing
    /// zero-fills the new tail.
    pub fn resize(&mut self, new_size: usize) {
        self.data.resize(new_size, 0);
    }

    /// Grow to at least `minimum` bytes; never shrinks.
    pub fn ensure_size(&mut self, minimum: usize) {
        if self.data.len() < minimum {
            self.data.resize(minimum, 0);
        }
    }

    /// Overwrite every byte with `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    pub fn append(&mut self, src: &[u8]) {
        self.data.extend_from_slice(src);
    }

    /// Copy `src` into the buffer starting at `offset`, without growing.
    /// Bytes that would land past the end are dropped. Returns how many
    /// bytes were actually written.
    pub fn copy_from(&mut self, src: &[u8], offset: usize) -> usize {
        if offset >= self.data.len() {
            return 0;
        }
        let num = src.len().min(self.data.len() - offset);
        self.data[offset..offset + num].copy_from_slice(&src[..num]);
        num
    }

    /// Fill `dst` from the buffer starting at `offset`. The part of
    /// `dst` with no corresponding buffer byte is zeroed. Returns how
    /// many real bytes were copied.
    pub fn copy_to(&self, dst: &mut [u8], offset: usize) -> usize {
        let num = if offset >= self.data.len() {
            0
        } else {
            dst.len().min(self.data.len() - offset)
        };
        if num > 0 {
            dst[..num].copy_from_slice(&self.data[offset..offset + num]);
        }
        dst[num..].fill(0);
        num
    }

    /// Remove `num_bytes` starting at `start`, shifting the tail down.
    /// A range reaching past the end simply truncates the buffer.
    pub fn remove_section(&mut self, start: usize, num_bytes: usize) {
        if start >= self.data.len() || start.saturating_add(num_bytes) >= self.data.len() {
            self.data.truncate(start.min(self.data.len()));
        } else if num_bytes > 0 {
            self.data.drain(start..start + num_bytes);
        }
    }

    /// Read up to 32 bits starting at absolute bit position `start_bit`.
    ///
    /// The buffer is treated as a little-endian bit stream: bit 0 is the
    /// least significant bit of byte 0. Bits past the end read as zero;
    /// `num_bits` above 32 is capped.
    pub fn get_bit_range(&self, start_bit: usize, num_bits: usize) -> u32 {
        let mut result: u32 = 0;
        let mut byte = start_bit >> 3;
        let mut offset_in_byte = start_bit & 7;
        let mut bits_so_far = 0;
        let mut remaining = num_bits.min(MAX_BIT_RANGE);

        while remaining > 0 && byte < self.data.len() {
            let bits_this_time = remaining.min(8 - offset_in_byte);
            let mask = (0xffu32 >> (8 - bits_this_time)) << offset_in_byte;

            result |= ((u32::from(self.data[byte]) & mask) >> offset_in_byte) << bits_so_far;

            bits_so_far += bits_this_time;
            remaining -= bits_this_time;
            byte += 1;
            offset_in_byte = 0;
        }

        result
    }

    /// Write the low `num_bits` bits of `value` starting at absolute bit
    /// position `start_bit`, in the same LSB-first order that
    /// [`get_bit_range`](ByteBuffer::get_bit_range) reads. Bits past the
    /// end are dropped; `num_bits` above 32 is capped.
    pub fn set_bit_range(&mut self, start_bit: usize, num_bits: usize, value: u32) {
        let mut byte = start_bit >> 3;
        let mut offset_in_byte = start_bit & 7;
        let mut remaining = num_bits.min(MAX_BIT_RANGE);
        let mut bits = value;

        while remaining > 0 && byte < self.data.len() {
            let bits_this_time = remaining.min(8 - offset_in_byte);
            let write_mask = ((1u32 << bits_this_time) - 1) << offset_in_byte;
            let current = u32::from(self.data[byte]);

            self.data[byte] =
                ((current & !write_mask) | ((bits << offset_in_byte) & write_mask)) as u8;

            bits >>= bits_this_time;
            remaining -= bits_this_time;
            byte += 1;
            offset_in_byte = 0;
        }
    }

    /// Lowercase hex rendering of the contents, two digits per byte.
    pub fn to_hex_string(&self) -> String {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut out = String::with_capacity(self.data.len() * 2);
        for &b in &self.data {
            out.push(DIGITS[usize::from(b >> 4)] as char);
            out.push(DIGITS[usize::from(b & 0x0f)] as char);
        }
        out
    }

    /// Replace the contents by parsing a hex string.
    ///
    /// The parser is lenient: anything that is not a hex digit is
    /// skipped, so separators and whitespace are fine. A trailing
    /// unpaired digit is dropped.
    pub fn load_from_hex(&mut self, hex: &str) {
        let mut out = Vec::with_capacity(hex.len() / 2);
        let mut pending: Option<u8> = None;

        for c in hex.chars() {
            let nibble = match c.to_digit(16) {
                Some(v) => v as u8,
                None => continue,
            };
            match pending.take() {
                Some(high) => out.push((high << 4) | nibble),
                None => pending = Some(nibble),
            }
        }

        self.data = out;
    }

    /// Standard-alphabet base64 rendering of the contents.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.data)
    }

    /// Decode a standard-alphabet base64 string into a new buffer.
    pub fn from_base64(encoded: &str) -> Result<Self, BufferError> {
        Ok(Self {
            data: BASE64.decode(encoded)?,
        })
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteBuffer({} bytes: {})", self.len(), self.to_hex_string())
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
