//! Public API traits and error types for the dchacha library
//!
//! This crate provides the public API surface shared by the cipher and streaming
//! crates: the error taxonomy, validation helpers and the [`StreamCipher`] trait.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::StreamCipher;
