//! Trait definitions for the dchacha ecosystem

pub mod stream;

pub use stream::StreamCipher;
