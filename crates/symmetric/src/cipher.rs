//! Symmetric cipher traits for xorcrypt-symmetric
//!
//! This module defines the core traits used by the symmetric
//! transforms in the library.

use crate::error::Result;

/// Common trait for all symmetric transform algorithms
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}

/// Trait for stateful stream transforms over byte fragments
///
/// Implementations carry a cursor that advances by one per transformed
/// byte and persists across calls, so successive fragments continue one
/// keystream.
pub trait StreamCipher: SymmetricCipher {
    /// Transforms a fragment, advancing the cursor by its length
    ///
    /// Output length always equals input length.
    fn transform(&mut self, fragment: &[u8]) -> Vec<u8>;

    /// Total bytes transformed by this instance so far
    fn position(&self) -> u64;
}
