//! Block cipher and block mode contracts
//!
//! A [`BlockCipher`] transforms exactly one block per call. A [`BlockMode`]
//! drives a block cipher across a buffer made of whole blocks.
//!
//! Neither trait returns errors at call time. Buffer length requirements are
//! part of the caller's contract, and implementations panic when they are
//! broken: carrying on would produce or consume corrupted ciphertext.

/// A keyed block cipher operating on fixed-size blocks
pub trait BlockCipher {
    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Encrypts `src` into `dst`, each exactly one block long
    ///
    /// # Panics
    ///
    /// Panics unless both buffers are exactly [`BlockCipher::block_size`]
    /// bytes long.
    fn encrypt(&self, dst: &mut [u8], src: &[u8]);

    /// Decrypts `src` into `dst`, each exactly one block long
    ///
    /// # Panics
    ///
    /// Panics unless both buffers are exactly [`BlockCipher::block_size`]
    /// bytes long.
    fn decrypt(&self, dst: &mut [u8], src: &[u8]);

    /// Encrypts exactly one block in place
    ///
    /// # Panics
    ///
    /// Panics unless `block` is exactly [`BlockCipher::block_size`] bytes long.
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypts exactly one block in place
    ///
    /// # Panics
    ///
    /// Panics unless `block` is exactly [`BlockCipher::block_size`] bytes long.
    fn decrypt_block(&self, block: &mut [u8]);

    /// Human-readable algorithm name
    fn name(&self) -> &'static str;
}

impl<C: BlockCipher + ?Sized> BlockCipher for &C {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt(&self, dst: &mut [u8], src: &[u8]) {
        (**self).encrypt(dst, src)
    }

    fn decrypt(&self, dst: &mut [u8], src: &[u8]) {
        (**self).decrypt(dst, src)
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        (**self).decrypt_block(block)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A block mode processing buffers made of whole blocks
pub trait BlockMode {
    /// Block size in bytes of the underlying cipher
    fn block_size(&self) -> usize;

    /// Processes every block of `src`, writing the result to the front of `dst`
    ///
    /// # Panics
    ///
    /// Panics if `src` is not a whole number of blocks, if `dst` is shorter
    /// than `src`, or if the two buffers partially overlap.
    fn crypt_blocks(&self, dst: &mut [u8], src: &[u8]);

    /// Processes every block of `buf` in place
    ///
    /// # Panics
    ///
    /// Panics if `buf` is not a whole number of blocks.
    fn crypt_blocks_in_place(&self, buf: &mut [u8]);
}
