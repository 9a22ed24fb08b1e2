//! ChaCha20 block function (RFC 7539, Section 2.3)

use dchacha_common::EphemeralSecret;
use dchacha_internal::word::{add, rotl, store_le};
use dchacha_params::{CHACHA20_BLOCK_SIZE, CHACHA20_DOUBLE_ROUNDS, CHACHA20_STATE_WORDS};

use super::state::CipherState;

/// One keystream block, wiped when dropped
pub(crate) type KeystreamBlock = EphemeralSecret<[u8; CHACHA20_BLOCK_SIZE]>;

/// The ChaCha20 quarter round
#[inline(always)]
pub(crate) fn quarter_round(x: &mut [u32; CHACHA20_STATE_WORDS], a: usize, b: usize, c: usize, d: usize) {
    x[a] = add(x[a], x[b]);
    x[d] = rotl(x[d] ^ x[a], 16);

    x[c] = add(x[c], x[d]);
    x[b] = rotl(x[b] ^ x[c], 12);

    x[a] = add(x[a], x[b]);
    x[d] = rotl(x[d] ^ x[a], 8);

    x[c] = add(x[c], x[d]);
    x[b] = rotl(x[b] ^ x[c], 7);
}

#[inline(always)]
fn double_round(x: &mut [u32; CHACHA20_STATE_WORDS]) {
    // Column rounds
    quarter_round(x, 0, 4, 8, 12);
    quarter_round(x, 1, 5, 9, 13);
    quarter_round(x, 2, 6, 10, 14);
    quarter_round(x, 3, 7, 11, 15);

    // Diagonal rounds
    quarter_round(x, 0, 5, 10, 15);
    quarter_round(x, 1, 6, 11, 12);
    quarter_round(x, 2, 7, 8, 13);
    quarter_round(x, 3, 4, 9, 14);
}

/// Generate the keystream block for the current counter, then advance it
pub(crate) fn keystream_block(state: &mut CipherState) -> KeystreamBlock {
    let mut working = EphemeralSecret::new(*state.words());

    for _ in 0..CHACHA20_DOUBLE_ROUNDS {
        double_round(&mut working);
    }

    for (w, s) in working.iter_mut().zip(state.words().iter()) {
        *w = add(*w, *s);
    }

    let mut block = EphemeralSecret::new([0u8; CHACHA20_BLOCK_SIZE]);
    store_le(&working[..], &mut block[..]);

    state.advance();
    block
}
