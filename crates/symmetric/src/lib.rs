//! Symmetric XOR transforms for the XORCRYPT library
//!
//! This crate provides the transform layer on top of the keystream engine
//! in `xorcrypt-algorithms`: a key type, encrypting and decrypting
//! transforms, and chainable channels that bind a transform to any byte
//! destination or source. Files and in-memory buffers are driven through
//! the same calling code.
//!
//! A write channel is obtained by binding a destination to a transform
//! and accepts fragments left to right; a read channel drains a source
//! through the transform in one pass. The transform owns the key cursor,
//! which keeps advancing across channels, so a stream can continue
//! correctly over several bind/feed rounds.

#![forbid(unsafe_code)]

pub mod buffer;
pub mod cipher;
pub mod error;
pub mod streaming;
pub mod xor;

// Re-export main types for convenience
pub use buffer::Buffer;
pub use cipher::{StreamCipher, SymmetricCipher};
pub use streaming::xor::{XorDecryptStream, XorEncryptStream};
pub use streaming::{StreamingDecrypt, StreamingEncrypt};
pub use xor::{XorDecryptor, XorEncryptor, XorKey};

// Re-export the API error system instead of custom error types
pub use xorcrypt_api::error::{Error, Result};

// Re-export commonly used validation and error handling utilities
pub use xorcrypt_api::error::{validate, ResultExt};
