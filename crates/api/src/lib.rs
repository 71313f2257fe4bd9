//! Public API types for the XORCRYPT library
//!
//! This crate provides the shared API surface for the xorcrypt ecosystem:
//! the unified error type, result aliases, validation helpers, and the
//! error-handling extension traits used by the algorithm and transform
//! layers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use error::{CipherResult, KeyResult, StreamResult};
pub use error::{validate, ResultExt};
