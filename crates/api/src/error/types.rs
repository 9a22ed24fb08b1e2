//! Error type definitions for cipher operations

use thiserror::Error;

/// Result type for dchacha operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for dchacha operations
///
/// Every variant is a violation of the caller's contract detected before any
/// output byte is written. None of them is transient, so retrying the same call
/// fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key absent (`actual == None`) or not exactly `expected` bytes
    #[error("invalid key length: expected {expected} bytes, {}", describe_len(.actual))]
    InvalidKeyLength {
        expected: usize,
        actual: Option<usize>,
    },

    /// Nonce absent (`actual == None`) or not exactly `expected` bytes
    #[error("invalid nonce length: expected {expected} bytes, {}", describe_len(.actual))]
    InvalidNonceLength {
        expected: usize,
        actual: Option<usize>,
    },

    /// Input buffer was not supplied
    #[error("{context}: input buffer is absent")]
    NullInput { context: &'static str },

    /// Output buffer was not supplied
    #[error("{context}: output buffer is absent")]
    NullOutput { context: &'static str },

    /// Byte count is negative or larger than the data available
    #[error("{context}: invalid length {requested} (available {available})")]
    InvalidLength {
        context: &'static str,
        requested: i64,
        available: usize,
    },

    /// Output buffer cannot hold the requested number of bytes
    #[error("{context}: output buffer too small (required {required}, got {actual})")]
    BufferTooSmall {
        context: &'static str,
        required: usize,
        actual: usize,
    },

    /// The cipher instance has been disposed and its state wiped
    #[error("{context}: cipher instance has been disposed")]
    UseAfterDispose { context: &'static str },

    /// Decrypted bytes are not valid UTF-8
    #[error("{context}: decrypted bytes are not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        context: &'static str,
        valid_up_to: usize,
    },
}

impl Error {
    /// Whether this error was caused by using a disposed instance
    pub fn is_use_after_dispose(&self) -> bool {
        matches!(self, Self::UseAfterDispose { .. })
    }
}

fn describe_len(actual: &Option<usize>) -> String {
    match actual {
        Some(len) => format!("got {}", len),
        None => "got none".to_string(),
    }
}
