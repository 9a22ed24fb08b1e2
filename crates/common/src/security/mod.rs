//! Security primitives and memory safety utilities
//!
//! Every type here wipes its contents when it goes out of scope, on every exit
//! path including early returns and unwinding.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

#[cfg(feature = "alloc")]
pub use secret::SecretVec;
