//! # speck
//!
//! The Speck family of lightweight ARX block ciphers, with an electronic
//! codebook (ECB) mode driver.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! speck = "0.3"
//! ```
//!
//! ```
//! use speck::prelude::*;
//!
//! // Speck64/128: 8-byte blocks, 16-byte key
//! let cipher = speck::new_cipher(&[7u8; 16], 8).unwrap();
//! assert_eq!(cipher.block_size(), 8);
//!
//! let mut buf = *b"sixteen byte msg";
//! Ecb::encrypter(&cipher).crypt_blocks_in_place(&mut buf);
//! Ecb::decrypter(&cipher).crypt_blocks_in_place(&mut buf);
//! assert_eq!(&buf, b"sixteen byte msg");
//!
//! // There is no Speck variant with a 4-byte block and a 16-byte key
//! assert!(speck::new_cipher(&[0u8; 16], 4).is_err());
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, `std::error::Error` impls
//! - `alloc`: `Vec`-returning helpers and random key generation
//! - `rand`: re-export of the `rand` crate
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`speck-api`]: error type and the block cipher / block mode traits
//! - [`speck-algorithms`]: the Speck engine and ECB mode
//! - [`speck-params`]: parameter tables
//! - [`speck-internal`]: byte-order and buffer helpers

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use speck_algorithms as algorithms;
pub use speck_api as api;
pub use speck_internal as internal;
pub use speck_params as params;

pub use speck_algorithms::block::{Direction, Ecb, Speck, Variant};

#[cfg(feature = "rand")]
pub use rand;
pub use zeroize;

/// Builds a Speck cipher from raw key bytes and a block size in bytes
///
/// Fails with [`api::Error::InvalidSize`] when the pair is not one of the
/// ten Speck variants.
pub fn new_cipher(key: &[u8], block_size: usize) -> api::Result<Speck> {
    algorithms::to_core_result(Speck::new(key, block_size), "Speck::new")
}

/// Common imports for speck users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{BlockCipher, BlockMode};

    // Re-export the cipher and its mode
    pub use crate::{Direction, Ecb, Speck, Variant};
}
