//! Streaming encryption for the dchacha library
//!
//! Drives any [`StreamCipher`] over `std::io` readers and writers, and over
//! tokio's `AsyncRead`/`AsyncWrite` with the `async` feature.
//!
//! ```
//! use dchacha_algorithms::ChaCha20;
//! use dchacha_symmetric::{StreamingCipher, DEFAULT_CHUNK_SIZE};
//!
//! # fn main() -> Result<(), dchacha_symmetric::StreamError> {
//! let plaintext = b"attack at dawn".to_vec();
//! let mut cipher = ChaCha20::new(&[7u8; 32], &[1u8; 12], 0)?;
//! let mut ciphertext = Vec::new();
//! cipher.encrypt_stream(&mut ciphertext, plaintext.as_slice(), DEFAULT_CHUNK_SIZE)?;
//! assert_eq!(ciphertext.len(), plaintext.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod streaming;

pub use dchacha_api::StreamCipher;
pub use dchacha_params::DEFAULT_CHUNK_SIZE;
pub use error::{StreamError, StreamResult};
pub use streaming::{process_stream, StreamingCipher};

#[cfg(feature = "async")]
pub use streaming::process_stream_async;
