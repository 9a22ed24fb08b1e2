//! # dchacha
//! 
//! The ChaCha20 stream cipher (RFC 7539) with zeroizing state, width-selectable
//! keystream combination and synchronous/asynchronous streaming.
//! 
//! ## Usage
//! 
//! ```
//! use dchacha::prelude::*;
//!
//! # fn main() -> dchacha::api::Result<()> {
//! let key = [0x42u8; CHACHA20_KEY_SIZE];
//! let nonce = [0x24u8; CHACHA20_NONCE_SIZE];
//!
//! let mut cipher = ChaCha20::new(&key, &nonce, 1)?;
//! let ciphertext = cipher.encrypt_text("hello")?;
//! cipher.dispose();
//!
//! let mut cipher = ChaCha20::new(&key, &nonce, 1)?;
//! assert_eq!(cipher.decrypt_to_text(&ciphertext)?, "hello");
//! # Ok(())
//! # }
//! ```
//! 
//! ## Features
//! 
//! - `std` (default): Standard library support
//! - `streaming` (default): `std::io` streaming engine
//! - `async` (default): tokio streaming engine
//! - `full`: All features enabled
//! 
//! ## Crate Structure
//! 
//! This is a facade crate that re-exports functionality from several sub-crates:
//! 
//! - `dchacha-algorithms`: Cipher state, block function and keystream combiner
//! - `dchacha-symmetric`: Streaming engines
//! - `dchacha-api`: Error taxonomy and the `StreamCipher` trait
//! - `dchacha-common`: Zeroizing secret containers
//! - `dchacha-internal`: Word arithmetic and lane-width XOR
//! - `dchacha-params`: Constants
//!
//! ChaCha20 provides confidentiality only. Authenticate ciphertext in the
//! calling protocol, and never reuse a (key, nonce, counter) triple.


// Core re-exports (always available)
pub use dchacha_algorithms as algorithms;
pub use dchacha_api as api;
pub use dchacha_common as common;
pub use dchacha_internal as internal;
pub use dchacha_params as params;

// Feature-gated re-exports
#[cfg(feature = "streaming")]
pub use dchacha_symmetric as symmetric;

pub use dchacha_algorithms::ChaCha20;

// Callers holding their own key material wipe it with the same crate
pub use zeroize;

/// Common imports for dchacha users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::StreamCipher;

    // Re-export the cipher and its knobs
    pub use crate::algorithms::{ChaCha20, XorWidth};

    // Re-export security types
    pub use crate::common::SecretBuffer;

    // Re-export constants
    pub use crate::params::{
        CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE, DEFAULT_CHUNK_SIZE,
    };

    #[cfg(feature = "streaming")]
    pub use crate::symmetric::{StreamError, StreamResult, StreamingCipher};
}
