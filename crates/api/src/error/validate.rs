//! Validation utilities shared by the cipher crates
//!
//! Each helper either returns the validated value or the matching [`Error`].

use super::{Error, Result};
use dchacha_params::{CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};

/// Validate that a key is present and exactly 32 bytes
#[inline]
pub fn key(key: Option<&[u8]>) -> Result<&[u8]> {
    match key {
        Some(k) if k.len() == CHACHA20_KEY_SIZE => Ok(k),
        other => Err(Error::InvalidKeyLength {
            expected: CHACHA20_KEY_SIZE,
            actual: other.map(<[u8]>::len),
        }),
    }
}

/// Validate that a nonce is present and exactly 12 bytes
#[inline]
pub fn nonce(nonce: Option<&[u8]>) -> Result<&[u8]> {
    match nonce {
        Some(n) if n.len() == CHACHA20_NONCE_SIZE => Ok(n),
        other => Err(Error::InvalidNonceLength {
            expected: CHACHA20_NONCE_SIZE,
            actual: other.map(<[u8]>::len),
        }),
    }
}

/// Validate that an input buffer was supplied
#[inline]
pub fn input<'a>(context: &'static str, input: Option<&'a [u8]>) -> Result<&'a [u8]> {
    input.ok_or(Error::NullInput { context })
}

/// Validate that an output buffer was supplied
#[inline]
pub fn output<'a>(context: &'static str, output: Option<&'a mut [u8]>) -> Result<&'a mut [u8]> {
    output.ok_or(Error::NullOutput { context })
}

/// Validate a signed byte count against the bytes available
#[inline]
pub fn count(context: &'static str, requested: i64, available: usize) -> Result<usize> {
    match usize::try_from(requested) {
        Ok(n) if n <= available => Ok(n),
        _ => Err(Error::InvalidLength {
            context,
            requested,
            available,
        }),
    }
}

/// Validate an unsigned byte count against the bytes available
#[inline]
pub fn max_count(context: &'static str, requested: usize, available: usize) -> Result<()> {
    if requested > available {
        return Err(Error::InvalidLength {
            context,
            requested: i64::try_from(requested).unwrap_or(i64::MAX),
            available,
        });
    }
    Ok(())
}

/// Validate that an output buffer can hold `required` bytes
#[inline]
pub fn output_capacity(context: &'static str, required: usize, actual: usize) -> Result<()> {
    if actual < required {
        return Err(Error::BufferTooSmall {
            context,
            required,
            actual,
        });
    }
    Ok(())
}

/// Validate that a chunk size is nonzero
#[inline]
pub fn chunk_size(context: &'static str, chunk: usize) -> Result<()> {
    if chunk == 0 {
        return Err(Error::InvalidLength {
            context,
            requested: 0,
            available: 0,
        });
    }
    Ok(())
}

/// Validate that an instance has not been disposed
#[inline]
pub fn live(context: &'static str, disposed: bool) -> Result<()> {
    if disposed {
        return Err(Error::UseAfterDispose { context });
    }
    Ok(())
}
