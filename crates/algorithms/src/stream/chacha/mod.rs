//! ChaCha family

/// ChaCha20 (RFC 7539)
pub mod chacha20;

pub use chacha20::ChaCha20;
