//! Repeating-key XOR transforms
//!
//! `XorEncryptor` and `XorDecryptor` wrap the keystream engine from
//! `xorcrypt-algorithms` and bind it to byte destinations and sources.
//! The two are operationally identical (XOR is self-inverse); the
//! distinct types keep the direction of a pipeline explicit.

pub mod keys;

pub use keys::XorKey;

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use xorcrypt_algorithms::RepeatingKeyXor;

use crate::cipher::{StreamCipher, SymmetricCipher};
use crate::error::{Result, SymmetricResultExt};
use crate::streaming::xor::{XorDecryptStream, XorEncryptStream};

/// Encrypting XOR transform
///
/// Owns the advancing key cursor. The cursor never resets between
/// operations, so fragments fed through successive channels form one
/// continuous keystream. A file destination created through
/// [`bind_path`](Self::bind_path) is owned by the transform until
/// [`close_file`](Self::close_file) releases it.
pub struct XorEncryptor {
    stream: RepeatingKeyXor,
    sink: Option<BufWriter<File>>,
}

impl XorEncryptor {
    /// Binds a writable destination, yielding a chainable write channel
    pub fn bind<W: Write>(&mut self, sink: W) -> XorEncryptStream<'_, W> {
        XorEncryptStream::new(&mut self.stream, sink)
    }

    /// Creates `path` for binary writing and binds it
    ///
    /// The file handle stays owned by the transform. Written data may sit
    /// in the write buffer, invisible to other readers of the path, until
    /// [`close_file`](Self::close_file) flushes and releases the handle.
    pub fn bind_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<XorEncryptStream<'_, &mut BufWriter<File>>> {
        let file = File::create(path.as_ref()).map_io_err()?;
        debug!("encryptor bound to {}", path.as_ref().display());
        let sink = self.sink.insert(BufWriter::new(file));
        Ok(XorEncryptStream::new(&mut self.stream, sink))
    }

    /// Flushes and releases the owned file handle
    ///
    /// Valid no-op when no file is bound.
    pub fn close_file(&mut self) -> Result<()> {
        if let Some(mut sink) = self.sink.take() {
            sink.flush().map_io_err()?;
            debug!("encryptor file handle released");
        }
        Ok(())
    }
}

impl SymmetricCipher for XorEncryptor {
    type Key = XorKey;

    fn new(key: &XorKey) -> Result<Self> {
        Ok(Self {
            stream: RepeatingKeyXor::new(key.as_bytes())?,
            sink: None,
        })
    }

    fn name() -> &'static str {
        "XOR-REPEATING-KEY"
    }
}

impl StreamCipher for XorEncryptor {
    fn transform(&mut self, fragment: &[u8]) -> Vec<u8> {
        self.stream.apply(fragment)
    }

    fn position(&self) -> u64 {
        self.stream.position()
    }
}

/// Decrypting XOR transform
///
/// Identical in operation to [`XorEncryptor`]: a stream encrypted from
/// cursor zero is recovered by a decryptor fed the ciphertext from
/// cursor zero, regardless of how the fragments were split along the
/// way.
pub struct XorDecryptor {
    stream: RepeatingKeyXor,
    source: Option<File>,
}

impl XorDecryptor {
    /// Binds a readable source, yielding a read channel
    pub fn bind<R: Read>(&mut self, source: R) -> XorDecryptStream<'_, R> {
        XorDecryptStream::new(&mut self.stream, source)
    }

    /// Opens `path` for binary reading and binds it
    ///
    /// The file handle stays owned by the transform; release it with
    /// [`close_file`](Self::close_file).
    pub fn bind_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<XorDecryptStream<'_, &mut File>> {
        let file = File::open(path.as_ref()).map_io_err()?;
        debug!("decryptor bound to {}", path.as_ref().display());
        let source = self.source.insert(file);
        Ok(XorDecryptStream::new(&mut self.stream, source))
    }

    /// Releases the owned file handle
    ///
    /// Valid no-op when no file is bound.
    pub fn close_file(&mut self) -> Result<()> {
        if self.source.take().is_some() {
            debug!("decryptor file handle released");
        }
        Ok(())
    }
}

impl SymmetricCipher for XorDecryptor {
    type Key = XorKey;

    fn new(key: &XorKey) -> Result<Self> {
        Ok(Self {
            stream: RepeatingKeyXor::new(key.as_bytes())?,
            source: None,
        })
    }

    fn name() -> &'static str {
        "XOR-REPEATING-KEY"
    }
}

impl StreamCipher for XorDecryptor {
    fn transform(&mut self, fragment: &[u8]) -> Vec<u8> {
        self.stream.apply(fragment)
    }

    fn position(&self) -> u64 {
        self.stream.position()
    }
}
