//! Stream cipher trait
//!
//! A stream cipher exposes one canonical operation, [`StreamCipher::combine`],
//! which XORs keystream into `count` bytes of input. Encryption and decryption
//! are the same operation; the remaining methods are thin wrappers over it.

use crate::error::{validate, Error, Result};
use zeroize::Zeroize;

/// Keystream cipher with an explicit, zeroizing lifecycle
pub trait StreamCipher {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Nonce size in bytes
    const NONCE_SIZE: usize;

    /// Keystream block size in bytes
    const BLOCK_SIZE: usize;

    /// XOR `count` bytes of `input` with keystream into `output[..count]`
    ///
    /// Fails before writing anything when `count > input.len()`, when `output`
    /// is shorter than `count` or when the instance has been disposed.
    fn combine(&mut self, output: &mut [u8], input: &[u8], count: usize) -> Result<()>;

    /// XOR keystream into `data` in place
    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()>;

    /// Wipe the secret state; further use fails with [`Error::UseAfterDispose`]
    fn dispose(&mut self);

    /// Whether [`StreamCipher::dispose`] has been called
    fn is_disposed(&self) -> bool;

    /// Encrypt all of `input` into `output`
    fn encrypt(&mut self, output: &mut [u8], input: &[u8]) -> Result<()> {
        self.combine(output, input, input.len())
    }

    /// Decrypt all of `input` into `output`
    fn decrypt(&mut self, output: &mut [u8], input: &[u8]) -> Result<()> {
        self.combine(output, input, input.len())
    }

    /// Encrypt the first `len` bytes of `input` into `output`
    fn encrypt_len(&mut self, output: &mut [u8], input: &[u8], len: usize) -> Result<()> {
        self.combine(output, input, len)
    }

    /// Decrypt the first `len` bytes of `input` into `output`
    fn decrypt_len(&mut self, output: &mut [u8], input: &[u8], len: usize) -> Result<()> {
        self.combine(output, input, len)
    }

    /// Encrypt `input` into a newly allocated buffer
    fn encrypt_to_vec(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; input.len()];
        self.combine(&mut output, input, input.len())?;
        Ok(output)
    }

    /// Decrypt `input` into a newly allocated buffer
    fn decrypt_to_vec(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_to_vec(input)
    }

    /// Fill `output` with raw keystream
    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        validate::live("keystream", self.is_disposed())?;
        output.fill(0);
        self.apply_keystream(output)
    }

    /// Encrypt the UTF-8 bytes of `text`
    fn encrypt_text(&mut self, text: &str) -> Result<Vec<u8>> {
        self.encrypt_to_vec(text.as_bytes())
    }

    /// Decrypt `ciphertext` and interpret the result as UTF-8
    ///
    /// This only inverts [`StreamCipher::encrypt_text`]. Plaintext that is not
    /// valid UTF-8 is wiped and reported as [`Error::InvalidUtf8`].
    fn decrypt_to_text(&mut self, ciphertext: &[u8]) -> Result<String> {
        let plaintext = self.decrypt_to_vec(ciphertext)?;
        String::from_utf8(plaintext).map_err(|e| {
            let valid_up_to = e.utf8_error().valid_up_to();
            let mut bytes = e.into_bytes();
            bytes.zeroize();
            Error::InvalidUtf8 {
                context: "decrypt_to_text",
                valid_up_to,
            }
        })
    }
}
