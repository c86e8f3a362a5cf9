//! Block cipher implementations
//!
//! This module contains the Speck block cipher family and the electronic
//! codebook mode that drives any [`BlockCipher`] across a buffer.
//!
//! ## Example usage
//!
//! ```
//! use speck_algorithms::block::{BlockCipher, BlockMode, Ecb, Speck};
//!
//! let key = [0u8; 16];
//! let cipher = Speck::new(&key, 16).unwrap();
//!
//! let plaintext = *b"two blocks of sixteen bytes each";
//! let mut ciphertext = [0u8; 32];
//! Ecb::encrypter(&cipher).crypt_blocks(&mut ciphertext, &plaintext);
//!
//! let mut decrypted = [0u8; 32];
//! Ecb::decrypter(&cipher).crypt_blocks(&mut decrypted, &ciphertext);
//! assert_eq!(plaintext, decrypted);
//! ```

pub mod modes;
pub mod speck;

// Re-exports
pub use modes::{Direction, Ecb};
pub use speck::{Speck, Variant};
pub use speck_api::{BlockCipher, BlockMode};
