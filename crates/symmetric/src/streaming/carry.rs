//! Keystream carried across chunk boundaries
//!
//! [`StreamCipher::combine`] discards the unused end of its last block. Chunks
//! that are not a multiple of the block size would then skip keystream, so the
//! engines keep that block here and spend it on the start of the next chunk.

use dchacha_api::{Result, StreamCipher};
use dchacha_common::SecretVec;

/// One block of keystream and how much of it has been used
pub(crate) struct KeystreamCarry {
    block: SecretVec,
    used: usize,
}

impl KeystreamCarry {
    /// An empty carry for blocks of `block_size` bytes
    pub(crate) fn new(block_size: usize) -> Self {
        Self {
            block: SecretVec::zeroed(block_size),
            used: block_size,
        }
    }

    /// Unused keystream bytes left from the previous chunk
    pub(crate) fn remaining(&self) -> usize {
        self.block.len() - self.used
    }

    /// `output = input ^ keystream`, continuing where the previous call stopped
    ///
    /// `output` must be at least as long as `input`.
    pub(crate) fn combine<C: StreamCipher>(
        &mut self,
        cipher: &mut C,
        output: &mut [u8],
        input: &[u8],
    ) -> Result<()> {
        let block_size = self.block.len();
        let n = input.len();

        let head = n.min(self.remaining());
        self.xor_from_block(&mut output[..head], &input[..head]);

        let rest = n - head;
        let tail = rest % block_size;
        let full = rest - tail;
        if full > 0 {
            let range = head..head + full;
            cipher.combine(&mut output[range.clone()], &input[range], full)?;
        }

        if tail > 0 {
            cipher.keystream(self.block.as_mut_slice())?;
            self.used = 0;
            self.xor_from_block(&mut output[n - tail..n], &input[n - tail..]);
        }
        Ok(())
    }

    fn xor_from_block(&mut self, output: &mut [u8], input: &[u8]) {
        let keystream = &self.block.as_slice()[self.used..self.used + input.len()];
        for ((o, i), k) in output.iter_mut().zip(input).zip(keystream) {
            *o = i ^ k;
        }
        self.used += input.len();
    }
}
