//! Growable in-memory byte destination and source

use std::io::{self, Read, Write};

/// Growable byte store usable as both a write destination and a read
/// source
///
/// Writes append at the end; reads advance an internal position and do
/// not disturb the stored bytes, so data written through one channel can
/// be drained through another without rewinding. `with_capacity`
/// pre-sizes the backing store as a hint; writes past the hint grow the
/// store.
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    data: Vec<u8>,
    pos: usize,
}

impl Buffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer pre-sized for `expected` bytes
    pub fn with_capacity(expected: usize) -> Self {
        Self {
            data: Vec::with_capacity(expected),
            pos: 0,
        }
    }

    /// Number of bytes stored
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All stored bytes, independent of the read position
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning the stored bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Moves the read position back to the start
    pub fn rewind(&mut self) {
        self.pos = 0;
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for Buffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.data[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}
