//! Internal utilities for the speck library
//!
//! Byte-order conversion for variable-width words and buffer overlap checks.
//! Nothing here is part of the stable public API.

#![no_std]
#![forbid(unsafe_code)]

pub mod endian;
pub mod overlap;
