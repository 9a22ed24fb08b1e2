//! ChaCha20 stream cipher implementation
//!
//! This module implements the ChaCha20 stream cipher as defined in RFC 7539,
//! with a 32-bit block counter and a 96-bit nonce.

use core::fmt;

use dchacha_api::{validate, Error, Result, StreamCipher};
use dchacha_common::SecretBuffer;
use dchacha_internal::XorWidth;
use dchacha_params::{CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};
use tracing::{debug, trace};

mod block;
mod engine;
mod state;

pub use state::CipherState;

/// ChaCha20 stream cipher
///
/// Each instance exclusively owns one [`CipherState`]. Every call that produces
/// keystream takes `&mut self`, so one instance cannot be used from two places
/// at once; independent instances, even under the same key, share nothing.
///
/// The instance is single-use per (key, nonce, counter): encrypting two messages
/// from the same starting point reveals the XOR of the plaintexts.
pub struct ChaCha20 {
    /// `None` once disposed
    state: Option<CipherState>,
    xor_width: XorWidth,
}

impl ChaCha20 {
    /// Creates a new ChaCha20 instance from key and nonce slices
    ///
    /// The key must be exactly 32 bytes and the nonce exactly 12 bytes.
    pub fn new(key: &[u8], nonce: &[u8], counter: u32) -> Result<Self> {
        Self::from_parts(Some(key), Some(nonce), counter)
    }

    /// Creates a new ChaCha20 instance from a key and nonce that may be absent
    ///
    /// An absent key is reported as `InvalidKeyLength { actual: None }`.
    pub fn from_parts(key: Option<&[u8]>, nonce: Option<&[u8]>, counter: u32) -> Result<Self> {
        let state = CipherState::init(key, nonce, counter)?;
        Ok(Self::from_state(state))
    }

    /// Creates a new ChaCha20 instance from fixed-size arrays
    pub fn from_arrays(
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
    ) -> Self {
        Self::from_state(CipherState::from_arrays(key, nonce, counter))
    }

    /// Creates a new ChaCha20 instance from a [`SecretBuffer`] key
    pub fn from_secret(
        key: &SecretBuffer<CHACHA20_KEY_SIZE>,
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
    ) -> Self {
        Self::from_state(CipherState::from_secret(key, nonce, counter))
    }

    fn from_state(state: CipherState) -> Self {
        let xor_width = XorWidth::detect();
        trace!(counter = state.counter(), ?xor_width, "chacha20 instance created");
        Self {
            state: Some(state),
            xor_width,
        }
    }

    /// Pin the XOR lane width instead of the detected one
    pub fn with_xor_width(mut self, width: XorWidth) -> Self {
        self.xor_width = width;
        self
    }

    /// Change the XOR lane width; the output bytes do not depend on it
    pub fn set_xor_width(&mut self, width: XorWidth) {
        self.xor_width = width;
    }

    /// XOR lane width used by the combiner
    pub fn xor_width(&self) -> XorWidth {
        self.xor_width
    }

    /// Block counter of the next keystream block
    pub fn counter(&self) -> Result<u32> {
        self.state
            .as_ref()
            .map(CipherState::counter)
            .ok_or(Error::UseAfterDispose { context: "counter" })
    }

    /// Combine with buffers and a count that may be absent or out of range
    ///
    /// This is the checked entry point for callers that receive buffers and
    /// lengths from an untyped boundary: absent buffers fail with `NullInput` /
    /// `NullOutput` and a negative count with `InvalidLength`.
    pub fn combine_parts(
        &mut self,
        output: Option<&mut [u8]>,
        input: Option<&[u8]>,
        count: i64,
    ) -> Result<()> {
        validate::live("combine", self.is_disposed())?;
        let input = validate::input("combine", input)?;
        let output = validate::output("combine", output)?;
        let count = validate::count("combine", count, input.len())?;
        self.combine(output, input, count)
    }

    fn live_state(&mut self, context: &'static str) -> Result<&mut CipherState> {
        self.state.as_mut().ok_or(Error::UseAfterDispose { context })
    }
}

impl StreamCipher for ChaCha20 {
    const KEY_SIZE: usize = CHACHA20_KEY_SIZE;
    const NONCE_SIZE: usize = CHACHA20_NONCE_SIZE;
    const BLOCK_SIZE: usize = CHACHA20_BLOCK_SIZE;

    fn combine(&mut self, output: &mut [u8], input: &[u8], count: usize) -> Result<()> {
        let width = self.xor_width;
        let state = self.live_state("combine")?;
        validate::max_count("combine", count, input.len())?;
        validate::output_capacity("combine", count, output.len())?;

        engine::combine(state, width, &mut output[..count], &input[..count]);
        Ok(())
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        let width = self.xor_width;
        let state = self.live_state("apply_keystream")?;
        engine::apply(state, width, data);
        Ok(())
    }

    fn dispose(&mut self) {
        // Dropping the taken state wipes it
        if self.state.take().is_some() {
            debug!("chacha20 state disposed");
        }
    }

    fn is_disposed(&self) -> bool {
        self.state.is_none()
    }
}

impl fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaCha20")
            .field("disposed", &self.is_disposed())
            .field("xor_width", &self.xor_width)
            .finish_non_exhaustive()
    }
}
