//! ChaCha20 parameters (RFC 7539, Section 2.3)

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// ChaCha20 block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the ChaCha20 state
pub const CHACHA20_STATE_WORDS: usize = 16;

/// Number of double-rounds applied by the block function (20 rounds total)
pub const CHACHA20_DOUBLE_ROUNDS: usize = 10;

/// "expand 32-byte k" as four little-endian words
pub const CHACHA20_SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Index of the block counter word
pub const CHACHA20_COUNTER_WORD: usize = 12;

/// Index of the first nonce word, which also receives the counter carry
pub const CHACHA20_NONCE_WORD: usize = 13;

/// Default chunk size for the streaming engine
pub const DEFAULT_CHUNK_SIZE: usize = 1024;
