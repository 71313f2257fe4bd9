//! Streaming channels for the repeating-key XOR transforms
//!
//! A channel borrows the key cursor from its parent transform and pairs
//! it with a destination or source for the duration of one binding. The
//! cursor advances in the parent, so dropping a channel and binding a
//! new one continues the keystream instead of restarting it.

use std::io::{Read, Write};

use log::trace;
use xorcrypt_algorithms::RepeatingKeyXor;

use crate::error::{Result, SymmetricResultExt};
use crate::streaming::{StreamingDecrypt, StreamingEncrypt};

/// Write channel produced by [`XorEncryptor::bind`](crate::XorEncryptor::bind)
///
/// Fragments pushed through [`feed`](Self::feed) are transformed at the
/// current cursor and appended to the destination. `feed` returns the
/// channel again, so calls chain.
pub struct XorEncryptStream<'c, W: Write> {
    stream: &'c mut RepeatingKeyXor,
    sink: W,
}

impl<'c, W: Write> XorEncryptStream<'c, W> {
    pub(crate) fn new(stream: &'c mut RepeatingKeyXor, sink: W) -> Self {
        Self { stream, sink }
    }

    /// Transforms `fragment` and appends it to the destination
    pub fn feed(&mut self, fragment: impl AsRef<[u8]>) -> Result<&mut Self> {
        let mut chunk = fragment.as_ref().to_vec();
        self.stream.process(&mut chunk);
        self.sink.write_all(&chunk).map_io_err()?;
        trace!("fed {} bytes, cursor at {}", chunk.len(), self.stream.position());
        Ok(self)
    }
}

impl<'c, W: Write> StreamingEncrypt<W> for XorEncryptStream<'c, W> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.feed(data).map(|_| ())
    }

    fn finalize(self) -> Result<W> {
        let mut sink = self.sink;
        sink.flush().map_io_err()?;
        Ok(sink)
    }
}

/// Read channel produced by [`XorDecryptor::bind`](crate::XorDecryptor::bind)
pub struct XorDecryptStream<'c, R: Read> {
    stream: &'c mut RepeatingKeyXor,
    source: R,
}

impl<'c, R: Read> XorDecryptStream<'c, R> {
    pub(crate) fn new(stream: &'c mut RepeatingKeyXor, source: R) -> Self {
        Self { stream, source }
    }

    /// Reads the source to its end and transforms everything into `out`
    ///
    /// Previous contents of `out` are discarded. Returns the number of
    /// bytes produced.
    pub fn drain_into(mut self, out: &mut Vec<u8>) -> Result<usize> {
        out.clear();
        self.source.read_to_end(out).map_io_err()?;
        self.stream.process(out);
        trace!("drained {} bytes, cursor at {}", out.len(), self.stream.position());
        Ok(out.len())
    }
}

impl<'c, R: Read> StreamingDecrypt<R> for XorDecryptStream<'c, R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.source.read(buf).map_io_err()?;
        self.stream.process(&mut buf[..n]);
        Ok(n)
    }
}
