//! Property-based tests for the ChaCha20 engines

use dchacha_algorithms::{ChaCha20, StreamCipher, XorWidth, CHACHA20_BLOCK_SIZE};
use dchacha_symmetric::StreamingCipher;
use proptest::prelude::*;

fn any_width() -> impl Strategy<Value = XorWidth> {
    prop::sample::select(XorWidth::ALL.to_vec())
}

proptest! {
    #[test]
    fn chacha20_roundtrip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        counter in any::<u32>(),
        data in prop::collection::vec(any::<u8>(), 0..=2048)
    ) {
        let ciphertext = ChaCha20::from_arrays(&key, &nonce, counter).encrypt_to_vec(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());

        let plaintext = ChaCha20::from_arrays(&key, &nonce, counter).decrypt_to_vec(&ciphertext).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn chacha20_deterministic(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 1..=512)
    ) {
        let first = ChaCha20::from_arrays(&key, &nonce, 0).encrypt_to_vec(&data).unwrap();
        let second = ChaCha20::from_arrays(&key, &nonce, 0).encrypt_to_vec(&data).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn chacha20_width_does_not_change_output(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        width in any_width(),
        data in prop::collection::vec(any::<u8>(), 0..=1024)
    ) {
        let scalar = ChaCha20::from_arrays(&key, &nonce, 0)
            .with_xor_width(XorWidth::Scalar)
            .encrypt_to_vec(&data)
            .unwrap();
        let wide = ChaCha20::from_arrays(&key, &nonce, 0)
            .with_xor_width(width)
            .encrypt_to_vec(&data)
            .unwrap();
        prop_assert_eq!(scalar, wide);
    }

    #[test]
    fn chacha20_block_aligned_split(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        blocks in 0usize..8,
        data in prop::collection::vec(any::<u8>(), 0..=1024)
    ) {
        let split = (blocks * CHACHA20_BLOCK_SIZE).min(data.len() - data.len() % CHACHA20_BLOCK_SIZE);
        let whole = ChaCha20::from_arrays(&key, &nonce, 0).encrypt_to_vec(&data).unwrap();

        let mut cipher = ChaCha20::from_arrays(&key, &nonce, 0);
        let mut pieces = cipher.encrypt_to_vec(&data[..split]).unwrap();
        pieces.extend(cipher.encrypt_to_vec(&data[split..]).unwrap());
        prop_assert_eq!(pieces, whole);
    }

    #[test]
    fn chacha20_stream_matches_one_shot(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        chunk_size in 1usize..2048,
        data in prop::collection::vec(any::<u8>(), 0..=4096)
    ) {
        let expected = ChaCha20::from_arrays(&key, &nonce, 0).encrypt_to_vec(&data).unwrap();

        let mut streamed = Vec::new();
        ChaCha20::from_arrays(&key, &nonce, 0)
            .encrypt_stream(&mut streamed, data.as_slice(), chunk_size)
            .unwrap();
        prop_assert_eq!(streamed, expected);
    }
}
