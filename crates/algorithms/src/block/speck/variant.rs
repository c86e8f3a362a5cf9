//! Speck parameter sets
//!
//! A Speck instance is selected by its block size and key size. Each of the
//! ten published pairs fixes the word size, the number of key words and the
//! round count; every other pair is rejected.

use speck_params::utils::symmetric::{
    SpeckParams, SPECK128_128, SPECK128_192, SPECK128_256, SPECK32_64, SPECK32_ALPHA,
    SPECK32_BETA, SPECK48_72, SPECK48_96, SPECK64_128, SPECK64_96, SPECK96_144, SPECK96_96,
    SPECK_ALPHA, SPECK_BETA,
};

use crate::error::{Error, Result};

/// One of the ten Speck block size / key size configurations
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 32-bit block, 64-bit key
    Speck32_64,
    /// 48-bit block, 72-bit key
    Speck48_72,
    /// 48-bit block, 96-bit key
    Speck48_96,
    /// 64-bit block, 96-bit key
    Speck64_96,
    /// 64-bit block, 128-bit key
    Speck64_128,
    /// 96-bit block, 96-bit key
    Speck96_96,
    /// 96-bit block, 144-bit key
    Speck96_144,
    /// 128-bit block, 128-bit key
    Speck128_128,
    /// 128-bit block, 192-bit key
    Speck128_192,
    /// 128-bit block, 256-bit key
    Speck128_256,
}

impl Variant {
    /// Every variant, ordered by block size then key size
    pub const ALL: [Variant; 10] = [
        Variant::Speck32_64,
        Variant::Speck48_72,
        Variant::Speck48_96,
        Variant::Speck64_96,
        Variant::Speck64_128,
        Variant::Speck96_96,
        Variant::Speck96_144,
        Variant::Speck128_128,
        Variant::Speck128_192,
        Variant::Speck128_256,
    ];

    /// Looks up the variant for a block size and key size, both in bytes
    pub fn resolve(block_size: usize, key_size: usize) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.block_size() == block_size && v.key_size() == key_size)
            .ok_or(Error::Size { block_size, key_size })
    }

    const fn params(self) -> SpeckParams {
        match self {
            Variant::Speck32_64 => SPECK32_64,
            Variant::Speck48_72 => SPECK48_72,
            Variant::Speck48_96 => SPECK48_96,
            Variant::Speck64_96 => SPECK64_96,
            Variant::Speck64_128 => SPECK64_128,
            Variant::Speck96_96 => SPECK96_96,
            Variant::Speck96_144 => SPECK96_144,
            Variant::Speck128_128 => SPECK128_128,
            Variant::Speck128_192 => SPECK128_192,
            Variant::Speck128_256 => SPECK128_256,
        }
    }

    /// Block size in bytes
    pub const fn block_size(self) -> usize {
        self.params().0
    }

    /// Key size in bytes
    pub const fn key_size(self) -> usize {
        self.params().1
    }

    /// Word size in bits
    pub const fn word_bits(self) -> u32 {
        self.params().2
    }

    /// Word size in bytes
    pub const fn word_bytes(self) -> usize {
        (self.params().2 / 8) as usize
    }

    /// Number of words in the key
    pub const fn key_words(self) -> usize {
        self.params().3
    }

    /// Number of rounds
    pub const fn rounds(self) -> usize {
        self.params().4
    }

    /// Right rotation amount applied to `x` in each round
    pub const fn alpha(self) -> u32 {
        match self {
            Variant::Speck32_64 => SPECK32_ALPHA,
            _ => SPECK_ALPHA,
        }
    }

    /// Left rotation amount applied to `y` in each round
    pub const fn beta(self) -> u32 {
        match self {
            Variant::Speck32_64 => SPECK32_BETA,
            _ => SPECK_BETA,
        }
    }

    /// Algorithm name in the paper's `Speck<block>/<key>` notation
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Speck32_64 => "Speck32/64",
            Variant::Speck48_72 => "Speck48/72",
            Variant::Speck48_96 => "Speck48/96",
            Variant::Speck64_96 => "Speck64/96",
            Variant::Speck64_128 => "Speck64/128",
            Variant::Speck96_96 => "Speck96/96",
            Variant::Speck96_144 => "Speck96/144",
            Variant::Speck128_128 => "Speck128/128",
            Variant::Speck128_192 => "Speck128/192",
            Variant::Speck128_256 => "Speck128/256",
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
