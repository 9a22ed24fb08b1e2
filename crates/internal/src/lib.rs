//! Internal utilities for the dchacha library
//!
//! Word arithmetic, little-endian packing and lane-width XOR helpers shared by
//! the cipher crates. Nothing here holds state.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod simd;
pub mod word;

pub use simd::{xor_into, XorWidth};
