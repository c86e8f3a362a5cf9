//! Shared fixtures for the speck integration tests

pub mod vectors;
