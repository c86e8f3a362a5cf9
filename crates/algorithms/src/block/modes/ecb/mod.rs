//! Electronic codebook (ECB) mode
//!
//! ECB applies the block cipher to each block independently. Equal
//! plaintext blocks under one key give equal ciphertext blocks, so the mode
//! leaks repetition in its input. That is a property of the mode and is
//! preserved here.
//!
//! The drivers enforce three rules before touching any data:
//! - the input is a whole number of blocks,
//! - the output is at least as long as the input,
//! - input and output are either the same memory or do not overlap at all.
//!
//! [`BlockMode::crypt_blocks`] treats a broken rule as a programming error
//! and panics. [`Ecb::try_crypt_blocks`] reports the same faults as errors.

use core::ops::Range;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use speck_api::{BlockCipher, BlockMode};
use speck_internal::overlap::{inexact_overlap, ranges_inexact_overlap};

use crate::error::{validate, Error, Result};

const ECB_INPUT: &str = "ECB input";
const ECB_OUTPUT: &str = "ECB output";
const ECB_BUFFERS: &str = "ECB buffers";
const ECB_BLOCK_SIZE: &str = "ECB block size";

/// Which way an [`Ecb`] processor transforms blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apply the forward cipher
    Encrypt,
    /// Apply the inverse cipher
    Decrypt,
}

/// ECB processor over any [`BlockCipher`]
///
/// Holds only the wrapped cipher and a direction; there is no state carried
/// between calls or between blocks.
#[derive(Debug, Clone)]
pub struct Ecb<B: BlockCipher> {
    cipher: B,
    direction: Direction,
}

impl<B: BlockCipher> Ecb<B> {
    /// Creates an ECB encrypter over `cipher`
    pub fn encrypter(cipher: B) -> Self {
        Self { cipher, direction: Direction::Encrypt }
    }

    /// Creates an ECB decrypter over `cipher`
    pub fn decrypter(cipher: B) -> Self {
        Self { cipher, direction: Direction::Decrypt }
    }

    /// Direction this processor runs in
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The wrapped cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    /// Unwraps the processor, returning the cipher
    pub fn into_inner(self) -> B {
        self.cipher
    }

    #[inline(always)]
    fn process(&self, dst: &mut [u8], src: &[u8]) {
        match self.direction {
            Direction::Encrypt => self.cipher.encrypt(dst, src),
            Direction::Decrypt => self.cipher.decrypt(dst, src),
        }
    }

    #[inline(always)]
    fn process_in_place(&self, block: &mut [u8]) {
        match self.direction {
            Direction::Encrypt => self.cipher.encrypt_block(block),
            Direction::Decrypt => self.cipher.decrypt_block(block),
        }
    }

    fn block_size_checked(&self) -> Result<usize> {
        let bs = self.cipher.block_size();
        validate::parameter(bs != 0, ECB_BLOCK_SIZE, "cipher reports a zero block size")?;
        Ok(bs)
    }

    fn check(&self, dst: &[u8], src: &[u8]) -> Result<()> {
        let bs = self.block_size_checked()?;
        validate::multiple_of(ECB_INPUT, src.len(), bs)?;
        validate::min_length(ECB_OUTPUT, dst.len(), src.len())?;
        validate::parameter(
            !inexact_overlap(&dst[..src.len()], src),
            ECB_BUFFERS,
            "invalid buffer overlap",
        )
    }

    /// Processes every block of `src` into the front of `dst`
    ///
    /// Returns an error instead of panicking when the cipher reports a zero
    /// block size, `src` is not a whole number of blocks, or `dst` is too
    /// short. Nothing is written on error. An empty
    /// `src` is a no-op.
    pub fn try_crypt_blocks(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        self.check(dst, src)?;

        let bs = self.cipher.block_size();
        for (out, block) in dst[..src.len()].chunks_exact_mut(bs).zip(src.chunks_exact(bs)) {
            self.process(out, block);
        }
        Ok(())
    }

    /// Processes the blocks in `buf[src]`, writing them at `buf[dst..]`
    ///
    /// This is the single-buffer shape of [`BlockMode::crypt_blocks`], in the
    /// manner of `copy_within`. `dst == src.start` processes in place; any
    /// other overlap between source and destination is rejected.
    ///
    /// # Panics
    ///
    /// Panics if `src` lies outside `buf`, is not a whole number of blocks,
    /// if the destination runs past the end of `buf`, or if source and
    /// destination partially overlap.
    #[track_caller]
    pub fn crypt_blocks_within(&self, buf: &mut [u8], src: Range<usize>, dst: usize) {
        assert!(
            src.start <= src.end && src.end <= buf.len(),
            "speck/ecb: source range out of bounds"
        );
        let len = src.len();
        let bs = match self.block_size_checked() {
            Ok(bs) => bs,
            Err(err) => fault(err),
        };
        if let Err(err) = validate::multiple_of(ECB_INPUT, len, bs) {
            fault(err);
        }
        if let Err(err) = validate::min_length(ECB_OUTPUT, buf.len().saturating_sub(dst), len) {
            fault(err);
        }
        if ranges_inexact_overlap(src.clone(), dst..dst + len) {
            fault(Error::param(ECB_BUFFERS, "invalid buffer overlap"));
        }
        if len == 0 {
            return;
        }

        if dst == src.start {
            for block in buf[src].chunks_exact_mut(bs) {
                self.process_in_place(block);
            }
        } else if dst >= src.end {
            let (head, tail) = buf.split_at_mut(dst);
            self.crypt_disjoint(&mut tail[..len], &head[src]);
        } else {
            let (head, tail) = buf.split_at_mut(src.start);
            self.crypt_disjoint(&mut head[dst..dst + len], &tail[..len]);
        }
    }

    fn crypt_disjoint(&self, dst: &mut [u8], src: &[u8]) {
        let bs = self.cipher.block_size();
        for (out, block) in dst.chunks_exact_mut(bs).zip(src.chunks_exact(bs)) {
            self.process(out, block);
        }
    }

    /// Processes `data` into a freshly allocated buffer
    #[cfg(feature = "alloc")]
    pub fn crypt_vec(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; data.len()];
        self.try_crypt_blocks(&mut out, data)?;
        Ok(out)
    }
}

/// Maps a validation failure to the caller-contract panic it stands for
#[cold]
#[track_caller]
fn fault(err: Error) -> ! {
    match err {
        Error::Length { context: ECB_INPUT, .. } => panic!("speck/ecb: input not full blocks"),
        Error::Length { context: ECB_OUTPUT, .. } => panic!("speck/ecb: output smaller than input"),
        Error::Parameter { name: ECB_BUFFERS, .. } => panic!("speck/ecb: invalid buffer overlap"),
        Error::Parameter { name: ECB_BLOCK_SIZE, .. } => panic!("speck/ecb: zero block size"),
        other => panic!("speck/ecb: {}", other),
    }
}

impl<B: BlockCipher> BlockMode for Ecb<B> {
    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    #[track_caller]
    fn crypt_blocks(&self, dst: &mut [u8], src: &[u8]) {
        if let Err(err) = self.try_crypt_blocks(dst, src) {
            fault(err);
        }
    }

    #[track_caller]
    fn crypt_blocks_in_place(&self, buf: &mut [u8]) {
        let bs = match self.block_size_checked() {
            Ok(bs) => bs,
            Err(err) => fault(err),
        };
        if let Err(err) = validate::multiple_of(ECB_INPUT, buf.len(), bs) {
            fault(err);
        }
        for block in buf.chunks_exact_mut(bs) {
            self.process_in_place(block);
        }
    }
}
