//! Construction, disposal and instance-independence tests

use std::thread;

use dchacha_algorithms::{ChaCha20, Error, StreamCipher};

#[test]
fn test_rejected_construction() {
    assert!(matches!(
        ChaCha20::from_parts(None, Some(&[0u8; 12][..]), 0),
        Err(Error::InvalidKeyLength { actual: None, .. })
    ));
    assert!(matches!(
        ChaCha20::new(&[0u8; 31], &[0u8; 12], 0),
        Err(Error::InvalidKeyLength { actual: Some(31), .. })
    ));
    assert!(matches!(
        ChaCha20::new(&[0u8; 32], &[0u8; 11], 0),
        Err(Error::InvalidNonceLength { actual: Some(11), .. })
    ));
}

#[test]
fn test_dispose_is_idempotent_and_final() {
    let mut cipher = ChaCha20::new(&[9u8; 32], &[8u8; 12], 0).unwrap();
    let before = cipher.encrypt_to_vec(b"still alive").unwrap();
    assert_eq!(before.len(), 11);

    cipher.dispose();
    cipher.dispose();
    assert!(cipher.is_disposed());

    let err = cipher.encrypt_to_vec(b"too late").unwrap_err();
    assert_eq!(err, Error::UseAfterDispose { context: "combine" });
}

#[test]
fn test_independent_instances_across_threads() {
    let key = [0x3c; 32];
    let nonce = [0xc3; 12];
    let data: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
    let expected = ChaCha20::from_arrays(&key, &nonce, 0).encrypt_to_vec(&data).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let data = data.clone();
            thread::spawn(move || {
                let mut cipher = ChaCha20::from_arrays(&key, &nonce, 0);
                cipher.encrypt_to_vec(&data).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_dropped_instance_leaves_others_untouched() {
    let key = [0x01; 32];
    let nonce = [0x02; 12];

    let mut kept = ChaCha20::from_arrays(&key, &nonce, 0);
    {
        let mut dropped = ChaCha20::from_arrays(&key, &nonce, 0);
        dropped.encrypt_to_vec(&[0u8; 64]).unwrap();
    }

    let mut reference = ChaCha20::from_arrays(&key, &nonce, 0);
    assert_eq!(
        kept.encrypt_to_vec(&[0u8; 64]).unwrap(),
        reference.encrypt_to_vec(&[0u8; 64]).unwrap()
    );
}
