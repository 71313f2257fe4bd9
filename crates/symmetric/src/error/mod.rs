//! Error handling for symmetric transform operations
//!
//! This module provides a thin layer over the API error system and adds
//! the I/O conversions used by the file- and buffer-backed channels.

// Re-export the primary API error system
pub use xorcrypt_api::error::{validate, Error, Result};
pub use xorcrypt_api::error::{ResultExt, StreamResult};

/// Convert an IO error to an API Error
pub fn from_io_error(err: std::io::Error) -> Error {
    Error::Io {
        context: "I/O operation",
        message: err.to_string(),
    }
}

/// Extension trait to make I/O error conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a Result with IO Error to a Result with API Error
    fn map_io_err(self) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, std::io::Error> {
    fn map_io_err(self) -> Result<T> {
        self.map_err(from_io_error)
    }
}

// Also implement for api::Error results so call sites can convert
// uniformly at the end of a mixed chain
impl<T> SymmetricResultExt<T> for Result<T> {
    fn map_io_err(self) -> Result<T> {
        // Already the right type, just pass through
        self
    }
}

// Specialized result types for different operations
pub type CipherResult<T> = Result<T>;
