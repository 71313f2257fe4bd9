//! Keystream primitives for the repeating-key XOR transform
//!
//! This crate provides the key schedule and the stream engine underneath
//! the xorcrypt transform layer. The engine holds a byte-granular cursor
//! that advances once per processed byte and never resets on its own, so
//! a message can be pushed through in arbitrary fragments and still form
//! one continuous keystream.
//!
//! The XOR-with-repeating-key construction is obfuscation, not
//! cryptography; no security property is claimed. Key material is still
//! treated carefully: schedule and engine state are wiped on drop.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error handling comes from the unified API error system
pub use xorcrypt_api::error;
pub use xorcrypt_api::error::{Error, Result};

// Stream cipher implementations
#[cfg(feature = "alloc")]
pub mod stream;
#[cfg(feature = "alloc")]
pub use stream::xor::{KeySchedule, RepeatingKeyXor};
