//! Speck block cipher implementations
//!
//! This module implements the Speck family of lightweight block ciphers
//! from "The SIMON and SPECK Families of Lightweight Block Ciphers"
//! (Beaulieu et al., 2013). Speck is an ARX design: every operation is a
//! modular addition, a rotation or an XOR over two words of n bits.
//!
//! All ten published variants share one engine. The block size and key
//! size select a [`Variant`], which fixes the word size, key word count
//! and round count. The key is expanded once at construction; encryption
//! and decryption then only read the round keys, so one [`Speck`] can be
//! shared freely across threads.
//!
//! Bytes are little-endian throughout: the published test vectors, written
//! most significant word first, appear byte-reversed on the wire.

use core::fmt;

use speck_api::BlockCipher;
use speck_internal::endian::words_from_le_bytes;
use speck_params::utils::symmetric::{
    SPECK128_BLOCK_SIZE, SPECK32_BLOCK_SIZE, SPECK48_BLOCK_SIZE, SPECK64_BLOCK_SIZE,
    SPECK96_BLOCK_SIZE, SPECK_MAX_KEY_WORDS, SPECK_MAX_ROUNDS,
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(feature = "alloc")]
use rand::{CryptoRng, RngCore};
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::error::{validate, Result};

mod codec;
mod round;
mod schedule;
mod variant;

pub use variant::Variant;

use round::Arx;

/// A keyed Speck instance
///
/// Holds the expanded round keys, which are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Speck {
    #[zeroize(skip)]
    variant: Variant,
    #[zeroize(skip)]
    arx: Arx,
    round_keys: [u64; SPECK_MAX_ROUNDS],
}

impl Speck {
    /// Creates a cipher from raw key bytes and a block size in bytes
    ///
    /// The key length together with `block_size` must name one of the ten
    /// Speck variants, otherwise [`Error::Size`](crate::Error::Size) is
    /// returned and nothing is constructed.
    pub fn new(key: &[u8], block_size: usize) -> Result<Self> {
        let variant = Variant::resolve(block_size, key.len())?;
        Self::with_variant(variant, key)
    }

    /// Creates a cipher for an explicit variant
    pub fn with_variant(variant: Variant, key: &[u8]) -> Result<Self> {
        validate::length("Speck key", key.len(), variant.key_size())?;

        let arx = Arx::new(variant);
        let mut key_words = Zeroizing::new([0u64; SPECK_MAX_KEY_WORDS]);
        let m = words_from_le_bytes(key, variant.word_bytes(), &mut key_words[..]);

        let mut round_keys = [0u64; SPECK_MAX_ROUNDS];
        schedule::expand(&arx, &key_words[..m], &mut round_keys[..variant.rounds()]);

        Ok(Speck {
            variant,
            arx,
            round_keys,
        })
    }

    /// Speck32 with a 64-bit key
    pub fn new_32(key: &[u8]) -> Result<Self> {
        Self::new(key, SPECK32_BLOCK_SIZE)
    }

    /// Speck48 with a 72 or 96-bit key
    pub fn new_48(key: &[u8]) -> Result<Self> {
        Self::new(key, SPECK48_BLOCK_SIZE)
    }

    /// Speck64 with a 96 or 128-bit key
    pub fn new_64(key: &[u8]) -> Result<Self> {
        Self::new(key, SPECK64_BLOCK_SIZE)
    }

    /// Speck96 with a 96 or 144-bit key
    pub fn new_96(key: &[u8]) -> Result<Self> {
        Self::new(key, SPECK96_BLOCK_SIZE)
    }

    /// Speck128 with a 128, 192 or 256-bit key
    pub fn new_128(key: &[u8]) -> Result<Self> {
        Self::new(key, SPECK128_BLOCK_SIZE)
    }

    /// Generate a random key for `variant`
    #[cfg(feature = "alloc")]
    pub fn generate_key<R: RngCore + CryptoRng>(variant: Variant, rng: &mut R) -> Zeroizing<Vec<u8>> {
        let mut key = Zeroizing::new(vec![0u8; variant.key_size()]);
        rng.fill_bytes(&mut key);
        key
    }

    /// The parameter set this instance was built for
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        self.variant.block_size()
    }

    pub(crate) fn round_keys(&self) -> &[u64] {
        &self.round_keys[..self.variant.rounds()]
    }

    fn check_block(&self, len: usize, what: &'static str) {
        if len != self.block_size() {
            panic!("speck: {} not full block", what);
        }
    }

    fn encrypt_words(&self, mut x: u64, mut y: u64) -> (u64, u64) {
        for &k in self.round_keys() {
            (x, y) = self.arx.forward(x, y, k);
        }
        (x, y)
    }

    fn decrypt_words(&self, mut x: u64, mut y: u64) -> (u64, u64) {
        for &k in self.round_keys().iter().rev() {
            (x, y) = self.arx.inverse(x, y, k);
        }
        (x, y)
    }
}

impl BlockCipher for Speck {
    fn block_size(&self) -> usize {
        self.variant.block_size()
    }

    fn encrypt(&self, dst: &mut [u8], src: &[u8]) {
        self.check_block(src.len(), "input");
        self.check_block(dst.len(), "output");
        let w = self.variant.word_bytes();
        let (x, y) = codec::unpack_block(src, w);
        let (x, y) = self.encrypt_words(x, y);
        codec::pack_block(dst, x, y, w);
    }

    fn decrypt(&self, dst: &mut [u8], src: &[u8]) {
        self.check_block(src.len(), "input");
        self.check_block(dst.len(), "output");
        let w = self.variant.word_bytes();
        let (x, y) = codec::unpack_block(src, w);
        let (x, y) = self.decrypt_words(x, y);
        codec::pack_block(dst, x, y, w);
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        self.check_block(block.len(), "input");
        let w = self.variant.word_bytes();
        let (x, y) = codec::unpack_block(block, w);
        let (x, y) = self.encrypt_words(x, y);
        codec::pack_block(block, x, y, w);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        self.check_block(block.len(), "input");
        let w = self.variant.word_bytes();
        let (x, y) = codec::unpack_block(block, w);
        let (x, y) = self.decrypt_words(x, y);
        codec::pack_block(block, x, y, w);
    }

    fn name(&self) -> &'static str {
        self.variant.name()
    }
}

impl fmt::Debug for Speck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speck")
            .field("variant", &self.variant)
            .field("round_keys", &"[REDACTED]")
            .finish()
    }
}
