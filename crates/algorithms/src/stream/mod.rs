//! Stream transform implementations
//!
//! This module provides the repeating-key XOR stream transform, a
//! symmetric transform that combines input bytes one at a time with a
//! keystream formed by cycling the key.
//!
//! # Security Considerations
//!
//! A repeating-key XOR keystream is periodic and falls to known-plaintext
//! and frequency analysis. Treat the transform as obfuscation only.

/// Repeating-key XOR implementation
pub mod xor;

// Re-export commonly used types
pub use xor::{KeySchedule, RepeatingKeyXor};
