//! Endianness utility functions
//!
//! Speck words come in widths that are not native integer sizes (24 and 48
//! bits), so every helper here takes the word width in bytes and carries the
//! value in a `u64`.

use byteorder::{ByteOrder, LittleEndian};

/// Read a little-endian word of `width` bytes (1 to 8) from the front of `bytes`
///
/// # Panics
///
/// Panics if `width` is outside 1..=8 or `bytes` is shorter than `width`.
#[inline(always)]
pub fn word_from_le_bytes(bytes: &[u8], width: usize) -> u64 {
    LittleEndian::read_uint(bytes, width)
}

/// Write `value` as a little-endian word of `width` bytes to the front of `out`
///
/// # Panics
///
/// Panics if `width` is outside 1..=8, `out` is shorter than `width`, or
/// `value` does not fit in `width` bytes.
#[inline(always)]
pub fn word_to_le_bytes(out: &mut [u8], value: u64, width: usize) {
    LittleEndian::write_uint(out, value, width)
}

/// Split `bytes` into consecutive little-endian words of `width` bytes
///
/// Fills `out` from index 0 and returns the number of words read.
///
/// # Panics
///
/// Panics if `bytes.len()` is not a multiple of `width` or `out` is too short.
pub fn words_from_le_bytes(bytes: &[u8], width: usize, out: &mut [u64]) -> usize {
    assert_eq!(bytes.len() % width, 0, "word buffer not a multiple of word width");
    let count = bytes.len() / width;
    for (word, chunk) in out[..count].iter_mut().zip(bytes.chunks_exact(width)) {
        *word = word_from_le_bytes(chunk, width);
    }
    count
}
