//! 32-bit word arithmetic and little-endian byte packing

use byteorder::{ByteOrder, LittleEndian};

/// Addition modulo 2^32
#[inline(always)]
pub fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Left rotation of a 32-bit word
#[inline(always)]
pub fn rotl(x: u32, n: u32) -> u32 {
    x.rotate_left(n)
}

/// Unpack `words.len()` little-endian words from `bytes`
///
/// # Panics
///
/// Panics if `bytes.len() != 4 * words.len()`.
#[inline]
pub fn load_le(bytes: &[u8], words: &mut [u32]) {
    LittleEndian::read_u32_into(bytes, words);
}

/// Pack `words` into `bytes` as little-endian
///
/// # Panics
///
/// Panics if `bytes.len() != 4 * words.len()`.
#[inline]
pub fn store_le(words: &[u32], bytes: &mut [u8]) {
    LittleEndian::write_u32_into(words, bytes);
}
