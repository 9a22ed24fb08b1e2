//! ChaCha20 keystream core
//!
//! This crate implements the ChaCha20 stream cipher of RFC 7539: state
//! initialization, the 20-round block function, the chunked keystream combiner
//! and the zeroizing lifecycle of the cipher state.
//!
//! # Security Features
//!
//! - The 16-word state lives in a zeroizing container and is wiped on
//!   [`StreamCipher::dispose`] or drop, whichever comes first
//! - Intermediate block words and keystream bytes are wiped after use
//! - No `unsafe` code
//!
//! ChaCha20 on its own provides confidentiality only. Ciphertext is not
//! authenticated, and reusing a (key, nonce, counter) triple reveals the XOR of
//! the plaintexts.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Stream cipher implementations
pub mod stream;
pub use stream::chacha::chacha20::{ChaCha20, CipherState};

// Error handling and the cipher trait come from the api crate
pub use dchacha_api::{validate, Error, Result, StreamCipher};
pub use dchacha_internal::XorWidth;
pub use dchacha_params::{CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};
