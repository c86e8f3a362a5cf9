//! Constant values for speck cryptographic operations

pub mod symmetric;
