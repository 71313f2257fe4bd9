//! Key type for the XOR transforms

use crate::error::{validate, Result};
use rand::{rngs::OsRng, RngCore};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Repeating-key XOR key material
///
/// Holds the raw key bytes of any non-zero length. Construction rejects
/// an empty key. The bytes are wiped on drop, never shown by `Debug`,
/// and compared in constant time.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct XorKey(Vec<u8>);

impl XorKey {
    /// Creates a new key from raw bytes
    ///
    /// Accepts anything convertible to a byte vector (`&str`, `String`,
    /// `&[u8]`, `Vec<u8>`). Fails when the input is empty.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        validate::key(!bytes.is_empty(), "XorKey", "key must not be empty")?;
        Ok(Self(bytes))
    }

    /// Creates a new random key of the given length
    pub fn generate(len: usize) -> Result<Self> {
        validate::min_length("XorKey::generate", len, 1)?;
        let mut key = vec![0u8; len];
        OsRng.fill_bytes(&mut key);
        Ok(Self(key))
    }

    /// Returns a reference to the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the key holds no bytes (never, for a constructed key)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for XorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XorKey([REDACTED])")
    }
}

impl PartialEq for XorKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for XorKey {}
