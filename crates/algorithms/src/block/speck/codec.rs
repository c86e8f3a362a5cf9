//! Block packing
//!
//! A block is two little-endian words laid out `[y, x]`: the low half of the
//! byte string is `y`, the high half is `x`. Read as one little-endian
//! integer this puts `x` in the most significant position, matching the
//! `(x, y)` notation of the published test vectors.

use speck_internal::endian::{word_from_le_bytes, word_to_le_bytes};

/// Splits a block into its `(x, y)` words
///
/// # Panics
///
/// Panics if `block` is not exactly two words long.
#[inline(always)]
pub(crate) fn unpack_block(block: &[u8], word_bytes: usize) -> (u64, u64) {
    assert_eq!(block.len(), 2 * word_bytes, "speck: block codec length mismatch");
    let y = word_from_le_bytes(&block[..word_bytes], word_bytes);
    let x = word_from_le_bytes(&block[word_bytes..], word_bytes);
    (x, y)
}

/// Writes `(x, y)` into a block
///
/// # Panics
///
/// Panics if `block` is not exactly two words long.
#[inline(always)]
pub(crate) fn pack_block(block: &mut [u8], x: u64, y: u64, word_bytes: usize) {
    assert_eq!(block.len(), 2 * word_bytes, "speck: block codec length mismatch");
    let (lo, hi) = block.split_at_mut(word_bytes);
    word_to_le_bytes(lo, y, word_bytes);
    word_to_le_bytes(hi, x, word_bytes);
}
