//! Known-answer tests against RFC 7539 across every entry point

use dchacha_algorithms::{ChaCha20, StreamCipher, XorWidth};
use dchacha_params::DEFAULT_CHUNK_SIZE;
use dchacha_symmetric::StreamingCipher;
use dchacha_tests::vectors::CHACHA20_VECTORS;

#[test]
fn test_vectors_byte_array() {
    dchacha_tests::setup_logging();

    for v in CHACHA20_VECTORS {
        let mut cipher = ChaCha20::new(&v.key(), &v.nonce(), v.counter).unwrap();
        let plaintext = v.plaintext();
        let mut ciphertext = vec![0u8; plaintext.len()];
        cipher.encrypt(&mut ciphertext, &plaintext).unwrap();
        assert_eq!(ciphertext, v.ciphertext(), "{}", v.name);

        let mut cipher = ChaCha20::new(&v.key(), &v.nonce(), v.counter).unwrap();
        assert_eq!(cipher.decrypt_to_vec(&v.ciphertext()).unwrap(), plaintext, "{}", v.name);
    }
}

#[test]
fn test_vectors_every_width() {
    for v in CHACHA20_VECTORS {
        for width in XorWidth::ALL {
            let mut cipher = ChaCha20::new(&v.key(), &v.nonce(), v.counter)
                .unwrap()
                .with_xor_width(width);
            let ciphertext = cipher.encrypt_to_vec(&v.plaintext()).unwrap();
            assert_eq!(ciphertext, v.ciphertext(), "{} {:?}", v.name, width);
        }
    }
}

#[test]
fn test_vectors_in_place() {
    for v in CHACHA20_VECTORS {
        let mut data = v.plaintext();
        ChaCha20::new(&v.key(), &v.nonce(), v.counter)
            .unwrap()
            .apply_keystream(&mut data)
            .unwrap();
        assert_eq!(data, v.ciphertext(), "{}", v.name);
    }
}

#[test]
fn test_vectors_stream() {
    for v in CHACHA20_VECTORS {
        for chunk_size in [1usize, 7, 64, 100, DEFAULT_CHUNK_SIZE] {
            let mut cipher = ChaCha20::new(&v.key(), &v.nonce(), v.counter).unwrap();
            let mut ciphertext = Vec::new();
            cipher
                .encrypt_stream(&mut ciphertext, v.plaintext().as_slice(), chunk_size)
                .unwrap();
            assert_eq!(ciphertext, v.ciphertext(), "{} chunk {}", v.name, chunk_size);
        }
    }
}

#[test]
fn test_sunscreen_text() {
    let v = &CHACHA20_VECTORS[1];
    let text = "Ladies and Gentlemen of the class of '99: If I could offer you only one tip for the future, sunscreen would be it.";

    let mut cipher = ChaCha20::new(&v.key(), &v.nonce(), v.counter).unwrap();
    assert_eq!(cipher.encrypt_text(text).unwrap(), v.ciphertext());

    let mut cipher = ChaCha20::new(&v.key(), &v.nonce(), v.counter).unwrap();
    assert_eq!(cipher.decrypt_to_text(&v.ciphertext()).unwrap(), text);
}

#[tokio::test]
async fn test_vectors_async_stream() {
    for v in CHACHA20_VECTORS {
        let mut cipher = ChaCha20::new(&v.key(), &v.nonce(), v.counter).unwrap();
        let mut ciphertext = Vec::new();
        cipher
            .encrypt_stream_async(&mut ciphertext, v.plaintext().as_slice(), 64)
            .await
            .unwrap();
        assert_eq!(ciphertext, v.ciphertext(), "{}", v.name);
    }
}
