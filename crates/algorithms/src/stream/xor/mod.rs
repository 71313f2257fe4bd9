//! Repeating-key XOR stream transform
//!
//! The transform XORs input bytes with the key repeated end to end:
//! `output[i] = input[i] ^ key[(start + i) % key.len()]`. Encryption and
//! decryption are the same operation, since XOR is self-inverse.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

/// Repeating-key schedule
///
/// Maps a logical stream position onto the key: position `i` yields
/// `key[i % key.len()]`. The key must be non-empty and construction
/// rejects an empty one, so lookups never divide by zero. Key bytes are
/// wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    key: Vec<u8>,
}

impl KeySchedule {
    /// Creates a schedule over a copy of `key`
    ///
    /// Fails with an invalid-key error when `key` is empty.
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::key(!key.is_empty(), "KeySchedule", "key must not be empty")?;
        Ok(Self { key: key.to_vec() })
    }

    /// Key byte for the given logical stream position
    pub fn byte_at(&self, position: u64) -> u8 {
        self.key[(position % self.key.len() as u64) as usize]
    }

    /// Writes consecutive schedule bytes starting at `position` into `out`
    pub fn fill(&self, position: u64, out: &mut [u8]) {
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.byte_at(position.wrapping_add(i as u64));
        }
    }

    /// Key length in bytes
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// True when the schedule holds no key bytes (never, by construction)
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Repeating-key XOR stream engine
///
/// Pairs a [`KeySchedule`] with a byte cursor. The cursor counts every
/// byte ever processed by this instance and never resets between calls,
/// so processing fragments F1..Fn in order produces the same bytes as
/// processing their concatenation. Replaying an input after the cursor
/// has advanced gives different output than the first pass.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RepeatingKeyXor {
    /// The key schedule
    schedule: KeySchedule,
    /// Cursor counting total bytes processed
    position: u64,
}

impl RepeatingKeyXor {
    /// Creates a new engine with the cursor at zero
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: KeySchedule::new(key)?,
            position: 0,
        })
    }

    /// Creates a new engine with the cursor already at `position`
    ///
    /// Resumes a stream that was partially processed elsewhere.
    pub fn with_position(key: &[u8], position: u64) -> Result<Self> {
        Ok(Self {
            schedule: KeySchedule::new(key)?,
            position,
        })
    }

    /// Transform data in place, advancing the cursor by `data.len()`
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= self.schedule.byte_at(self.position);
            self.position = self.position.wrapping_add(1);
        }
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Transform a copy of `input`, advancing the cursor by its length
    pub fn apply(&mut self, input: &[u8]) -> Vec<u8> {
        let mut output = input.to_vec();
        self.process(&mut output);
        output
    }

    /// Generate keystream directly into an output buffer
    ///
    /// Advances the cursor by `output.len()`, exactly as processing data
    /// of that length would.
    pub fn keystream(&mut self, output: &mut [u8]) {
        self.schedule.fill(self.position, output);
        self.position = self.position.wrapping_add(output.len() as u64);
    }

    /// Move the cursor to an absolute stream position
    pub fn seek(&mut self, position: u64) {
        self.position = position;
    }

    /// Move the cursor back to the start of the stream
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Total bytes processed by this instance
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Key length in bytes
    pub fn key_len(&self) -> usize {
        self.schedule.len()
    }
}
