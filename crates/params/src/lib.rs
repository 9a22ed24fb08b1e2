//! Constant values for the dchacha library
//!
//! Sizes and fixed words shared by every layer of the workspace. This crate has
//! no dependencies and is always `no_std`.

#![no_std]

pub mod chacha20;

pub use chacha20::*;
