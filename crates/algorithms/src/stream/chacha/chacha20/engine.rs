//! Keystream combiner
//!
//! Drives the block function across a buffer. Full 64-byte blocks are combined
//! first; a non-empty tail consumes one more block of which only the first
//! `tail` bytes are used and the rest is discarded. The next call therefore
//! always starts on a fresh block.

use dchacha_common::ZeroizeGuard;
use dchacha_internal::{xor_into, XorWidth};
use dchacha_params::CHACHA20_BLOCK_SIZE;

use super::block::keystream_block;
use super::state::CipherState;

/// `output = input ^ keystream`; both slices have the same length
pub(crate) fn combine(state: &mut CipherState, width: XorWidth, output: &mut [u8], input: &[u8]) {
    debug_assert_eq!(output.len(), input.len());

    let mut out_blocks = output.chunks_exact_mut(CHACHA20_BLOCK_SIZE);
    let mut in_blocks = input.chunks_exact(CHACHA20_BLOCK_SIZE);

    for (out, inp) in (&mut out_blocks).zip(&mut in_blocks) {
        let keystream = keystream_block(state);
        xor_into(width, out, inp, &keystream[..]);
    }

    let out_tail = out_blocks.into_remainder();
    let in_tail = in_blocks.remainder();
    if !out_tail.is_empty() {
        let keystream = keystream_block(state);
        xor_into(width, out_tail, in_tail, &keystream[..out_tail.len()]);
    }
}

/// `data ^= keystream` in place, with the same block accounting as [`combine`]
pub(crate) fn apply(state: &mut CipherState, width: XorWidth, data: &mut [u8]) {
    let mut scratch = [0u8; CHACHA20_BLOCK_SIZE];
    let mut scratch = ZeroizeGuard::new(&mut scratch);

    for chunk in data.chunks_mut(CHACHA20_BLOCK_SIZE) {
        let keystream = keystream_block(state);
        let n = chunk.len();
        scratch[..n].copy_from_slice(chunk);
        xor_into(width, chunk, &scratch[..n], &keystream[..n]);
    }
}
