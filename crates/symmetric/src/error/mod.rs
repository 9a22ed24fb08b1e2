//! Error handling for streaming operations
//!
//! Cipher errors and I/O errors are kept apart: an I/O error from the
//! caller's reader or writer is returned exactly as the channel produced it.

use std::io;

use dchacha_api::Error;
use thiserror::Error;

/// Error returned by the streaming engine
#[derive(Debug, Error)]
pub enum StreamError {
    /// The cipher rejected the call (disposed instance, bad chunk size, ...)
    #[error(transparent)]
    Cipher(#[from] Error),

    /// The underlying reader or writer failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl StreamError {
    /// The cipher error, if this is one
    pub fn as_cipher(&self) -> Option<&Error> {
        match self {
            Self::Cipher(e) => Some(e),
            Self::Io(_) => None,
        }
    }

    /// The I/O error, if this is one
    pub fn into_io(self) -> Option<io::Error> {
        match self {
            Self::Io(e) => Some(e),
            Self::Cipher(_) => None,
        }
    }
}

/// Result type for streaming operations
pub type StreamResult<T> = core::result::Result<T, StreamError>;
