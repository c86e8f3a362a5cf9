//! Block cipher modes of operation
//!
//! Only the electronic codebook mode is provided. Chaining modes carry
//! per-message state and belong a layer above the single-block engine.

pub mod ecb;

// Re-exports
pub use ecb::{Direction, Ecb};
