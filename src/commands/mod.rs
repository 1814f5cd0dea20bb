//! Command handlers for the `precompress` binary

pub mod compress;
pub mod manifest;
pub mod resolve;
