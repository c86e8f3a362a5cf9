//! Trait definitions for block ciphers and their modes of operation

pub mod block;

pub use block::{BlockCipher, BlockMode};
