//! Streaming interfaces for processing data larger than memory
//!
//! The traits here describe incremental pipelines: a write channel
//! accepts plaintext fragments and pushes transformed bytes into an
//! [`io::Write`](std::io::Write) destination, a read channel pulls
//! transformed bytes out of an [`io::Read`](std::io::Read) source.

use crate::error::Result;
use std::io::{Read, Write};

/// Incremental encryption into an underlying writer
pub trait StreamingEncrypt<W: Write> {
    /// Transforms a fragment and writes it to the destination
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Flushes the destination and hands it back
    fn finalize(self) -> Result<W>;
}

/// Incremental decryption out of an underlying reader
pub trait StreamingDecrypt<R: Read> {
    /// Reads from the source and transforms into `buf`, returning the
    /// number of bytes produced
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

pub mod xor;

pub use xor::{XorDecryptStream, XorEncryptStream};
