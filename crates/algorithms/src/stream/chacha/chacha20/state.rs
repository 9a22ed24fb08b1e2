//! ChaCha20 state initialization and counter management

use core::fmt;

use dchacha_api::{validate, Error, Result};
use dchacha_common::SecretBuffer;
use dchacha_internal::word;
use dchacha_params::{
    CHACHA20_COUNTER_WORD, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE, CHACHA20_NONCE_WORD,
    CHACHA20_SIGMA, CHACHA20_STATE_WORDS,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The 16-word ChaCha20 input block
///
/// | words  | content                         |
/// |--------|---------------------------------|
/// | 0..4   | sigma, "expand 32-byte k"       |
/// | 4..12  | key, little-endian              |
/// | 12     | block counter                   |
/// | 13..16 | nonce, little-endian            |
///
/// Only the counter word changes, and only when a keystream block is
/// generated. When it wraps, a carry of one goes into word 13. That carry is
/// propagated once per wrap and exhaustion of the nonce space is not
/// reported: keeping (key, nonce, counter) unique is the caller's job.
///
/// The words are wiped when the state is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CipherState {
    words: [u32; CHACHA20_STATE_WORDS],
}

impl CipherState {
    /// Build a state from an optional key and nonce
    ///
    /// An absent or wrongly sized key fails with `InvalidKeyLength`, an absent
    /// or wrongly sized nonce with `InvalidNonceLength`. The key words loaded
    /// before the nonce is checked are wiped before the error is returned.
    pub fn init(key: Option<&[u8]>, nonce: Option<&[u8]>, counter: u32) -> Result<Self> {
        let key = validate::key(key)?;
        let mut state = Self::keyed(key, counter);

        let nonce = validate::nonce(nonce).map_err(|e| state.abandon(e))?;
        state.load_nonce(nonce);

        Ok(state)
    }

    /// Build a state from fixed-size arrays; this cannot fail
    pub fn from_arrays(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
    ) -> Self {
        Self::assemble(key, nonce, counter)
    }

    /// Build a state from a key held in a [`SecretBuffer`]
    pub fn from_secret(
        key: &SecretBuffer<CHACHA20_KEY_SIZE>,
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
    ) -> Self {
        Self::assemble(key.as_slice(), nonce, counter)
    }

    // Lengths are fixed by the callers' types
    fn assemble(key: &[u8], nonce: &[u8], counter: u32) -> Self {
        let mut state = Self::keyed(key, counter);
        state.load_nonce(nonce);
        state
    }

    /// Sigma, key and counter loaded; the nonce words are still zero
    pub(crate) fn keyed(key: &[u8], counter: u32) -> Self {
        let mut words = [0u32; CHACHA20_STATE_WORDS];
        words[..4].copy_from_slice(&CHACHA20_SIGMA);
        word::load_le(key, &mut words[4..12]);
        words[CHACHA20_COUNTER_WORD] = counter;
        Self { words }
    }

    fn load_nonce(&mut self, nonce: &[u8]) {
        word::load_le(nonce, &mut self.words[CHACHA20_NONCE_WORD..]);
    }

    /// Wipe a partly built state and pass on the error that stopped it
    pub(crate) fn abandon(&mut self, err: Error) -> Error {
        self.zeroize();
        err
    }

    /// Current block counter
    pub fn counter(&self) -> u32 {
        self.words[CHACHA20_COUNTER_WORD]
    }

    pub(crate) fn words(&self) -> &[u32; CHACHA20_STATE_WORDS] {
        &self.words
    }

    /// Step the counter by one block, carrying into the first nonce word on wrap
    pub(crate) fn advance(&mut self) {
        let counter = word::add(self.words[CHACHA20_COUNTER_WORD], 1);
        self.words[CHACHA20_COUNTER_WORD] = counter;
        if counter == 0 {
            self.words[CHACHA20_NONCE_WORD] = word::add(self.words[CHACHA20_NONCE_WORD], 1);
        }
    }
}

impl fmt::Debug for CipherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherState")
            .field("counter", &self.counter())
            .field("words", &"[REDACTED]")
            .finish()
    }
}
