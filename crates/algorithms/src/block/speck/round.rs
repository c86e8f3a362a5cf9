//! The Speck round function and its inverse
//!
//! Words of every width are carried in a `u64`. All arithmetic is reduced
//! modulo 2^n, where n is the word size, so a value above the mask never
//! leaves this module.

use super::variant::Variant;

/// Word-size dependent add-rotate-xor arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Arx {
    bits: u32,
    mask: u64,
    alpha: u32,
    beta: u32,
}

impl Arx {
    pub(crate) const fn new(variant: Variant) -> Self {
        let bits = variant.word_bits();
        let mask = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
        Arx {
            bits,
            mask,
            alpha: variant.alpha(),
            beta: variant.beta(),
        }
    }

    // Rotation amounts are always in 1..n, so neither shift reaches 64.
    #[inline(always)]
    fn rotr(&self, x: u64, r: u32) -> u64 {
        ((x >> r) | (x << (self.bits - r))) & self.mask
    }

    #[inline(always)]
    fn rotl(&self, x: u64, r: u32) -> u64 {
        ((x << r) | (x >> (self.bits - r))) & self.mask
    }

    /// One forward round keyed by `k`
    #[inline(always)]
    pub(crate) fn forward(&self, x: u64, y: u64, k: u64) -> (u64, u64) {
        let x = (self.rotr(x, self.alpha).wrapping_add(y) & self.mask) ^ k;
        let y = self.rotl(y, self.beta) ^ x;
        (x, y)
    }

    /// Undoes [`Arx::forward`] for the same key
    #[inline(always)]
    pub(crate) fn inverse(&self, x: u64, y: u64, k: u64) -> (u64, u64) {
        let y = self.rotr(y ^ x, self.beta);
        let x = self.rotl((x ^ k).wrapping_sub(y) & self.mask, self.alpha);
        (x, y)
    }
}
