//! Constant values for the speck library
//!
//! This crate provides the parameter tables shared by the speck crates.

#![no_std]

pub mod utils;
