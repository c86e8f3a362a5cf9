//! Constants for the Speck block cipher family
//!
//! Parameters follow Table 4.1 of "The SIMON and SPECK Families of
//! Lightweight Block Ciphers" (Beaulieu et al., 2013).

/// Speck32 block size in bytes
pub const SPECK32_BLOCK_SIZE: usize = 4;

/// Speck48 block size in bytes
pub const SPECK48_BLOCK_SIZE: usize = 6;

/// Speck64 block size in bytes
pub const SPECK64_BLOCK_SIZE: usize = 8;

/// Speck96 block size in bytes
pub const SPECK96_BLOCK_SIZE: usize = 12;

/// Speck128 block size in bytes
pub const SPECK128_BLOCK_SIZE: usize = 16;

/// Largest number of key words across all variants
pub const SPECK_MAX_KEY_WORDS: usize = 4;

/// Largest round count across all variants
pub const SPECK_MAX_ROUNDS: usize = 34;

/// Right rotation applied to `x` for 16-bit words
pub const SPECK32_ALPHA: u32 = 7;

/// Left rotation applied to `y` for 16-bit words
pub const SPECK32_BETA: u32 = 2;

/// Right rotation applied to `x` for every word size above 16 bits
pub const SPECK_ALPHA: u32 = 8;

/// Left rotation applied to `y` for every word size above 16 bits
pub const SPECK_BETA: u32 = 3;

/// One row of the Speck parameter table
///
/// Fields: block size (bytes), key size (bytes), word size (bits),
/// key words, rounds.
pub type SpeckParams = (usize, usize, u32, usize, usize);

/// Speck32/64 parameters
pub const SPECK32_64: SpeckParams = (4, 8, 16, 4, 22);

/// Speck48/72 parameters
pub const SPECK48_72: SpeckParams = (6, 9, 24, 3, 22);

/// Speck48/96 parameters
pub const SPECK48_96: SpeckParams = (6, 12, 24, 4, 23);

/// Speck64/96 parameters
pub const SPECK64_96: SpeckParams = (8, 12, 32, 3, 26);

/// Speck64/128 parameters
pub const SPECK64_128: SpeckParams = (8, 16, 32, 4, 27);

/// Speck96/96 parameters
pub const SPECK96_96: SpeckParams = (12, 12, 48, 2, 28);

/// Speck96/144 parameters
pub const SPECK96_144: SpeckParams = (12, 18, 48, 3, 29);

/// Speck128/128 parameters
pub const SPECK128_128: SpeckParams = (16, 16, 64, 2, 32);

/// Speck128/192 parameters
pub const SPECK128_192: SpeckParams = (16, 24, 64, 3, 33);

/// Speck128/256 parameters
pub const SPECK128_256: SpeckParams = (16, 32, 64, 4, 34);
