//! Speck block cipher primitives
//!
//! This crate implements the Speck family of lightweight ARX block ciphers
//! and an electronic codebook (ECB) mode driver. The library is usable in
//! both `std` and `no_std` environments.
//!
//! # Security Notes
//!
//! - Expanded round keys are zeroized when a cipher is dropped
//! - Every operation is branch-free on secret data
//! - ECB reveals equal plaintext blocks; it is provided as a building block
//!   and for test vectors, not as a general-purpose encryption mode

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{to_core_result, validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{BlockCipher, BlockMode, Direction, Ecb, Speck, Variant};
