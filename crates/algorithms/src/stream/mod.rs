//! Stream cipher implementations
//!
//! Stream ciphers require a unique nonce for every message encrypted under the
//! same key. Reusing a nonce with the same key completely breaks the
//! confidentiality of both messages.

/// ChaCha family of stream cipher implementations
pub mod chacha;

pub use chacha::chacha20::ChaCha20;
