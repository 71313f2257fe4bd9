//! # xorcrypt
//!
//! A repeating-key XOR stream transform with a uniform chained interface
//! over files and in-memory buffers.
//!
//! XOR with a repeating key is obfuscation, not encryption: no claim of
//! cryptographic strength is made or implied. The library exists for
//! masking byte streams against casual inspection and for exercising
//! stream-transform plumbing with explicit resource ownership.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xorcrypt = "0.2"
//! ```
//!
//! ## Features
//!
//! - `symmetric` (default): transforms, channels, key type, buffer and
//!   file destinations
//! - `algorithms`: just the keystream engine (no_std-capable with
//!   `default-features = false` plus `alloc`)
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - `xorcrypt-api`: error types and result aliases
//! - `xorcrypt-algorithms`: the repeating-key keystream engine
//! - `xorcrypt-symmetric`: transforms bound to byte sinks and sources
//!
//! ## Example
//!
//! ```
//! use xorcrypt::prelude::*;
//!
//! # fn main() -> xorcrypt::api::Result<()> {
//! let key = XorKey::new("nopass")?;
//! let mut enc = XorEncryptor::new(&key)?;
//! let mut dec = XorDecryptor::new(&key)?;
//!
//! let mut buf = Buffer::with_capacity(32);
//! enc.bind(&mut buf).feed("dfg")?.feed(" opana")?;
//!
//! let mut plain = Vec::new();
//! dec.bind(&mut buf).drain_into(&mut plain)?;
//! assert_eq!(plain, b"dfg opana");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use xorcrypt_api as api;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use xorcrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use xorcrypt_symmetric as symmetric;

/// Common imports for xorcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export error handling utilities
    pub use crate::api::error::ResultExt;

    // Conditional re-exports based on features
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{KeySchedule, RepeatingKeyXor};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        Buffer, StreamCipher, StreamingDecrypt, StreamingEncrypt, SymmetricCipher,
        XorDecryptStream, XorDecryptor, XorEncryptStream, XorEncryptor, XorKey,
    };
}
