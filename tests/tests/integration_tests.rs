//! End-to-end tests through the `aescrypt` facade

use std::fs;

use aescrypt::prelude::*;
use aescrypt_tests::hex_bytes;
use aescrypt_tests::vectors::{
    FIPS_197_APPENDIX_B, FIPS_197_BLOCKS, SP_800_38A_CTR_AES128, SP_800_38A_CTR_AES256,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tempfile::tempdir;

#[test]
fn test_fips_197_block_vectors() {
    for vector in FIPS_197_BLOCKS.iter().chain(std::iter::once(&FIPS_197_APPENDIX_B)) {
        let cipher = Aes::new(&hex_bytes(vector.key)).unwrap();
        let plaintext = hex_bytes(vector.plaintext);

        let ciphertext = cipher.encrypt_block_copy(&plaintext).unwrap();
        assert_eq!(hex::encode(ciphertext), vector.ciphertext, "{}", vector.source);

        let mut block = ciphertext;
        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(block.to_vec(), plaintext, "{}", vector.source);
    }
}

#[test]
fn test_sp_800_38a_ctr_vectors() {
    for vector in [SP_800_38A_CTR_AES128, SP_800_38A_CTR_AES256] {
        let cipher = Aes::new(&hex_bytes(vector.key)).unwrap();
        let iv = hex_bytes(vector.iv);
        let plaintext = hex_bytes(vector.plaintext);

        let ciphertext = cipher.encrypt_ctr(&plaintext, &iv).unwrap();
        assert_eq!(hex::encode(&ciphertext), vector.ciphertext, "{}", vector.source);
        assert_eq!(cipher.decrypt_ctr(&ciphertext, &iv).unwrap(), plaintext);
    }
}

#[test]
fn test_ctr_driver_over_borrowed_cipher() {
    let vector = SP_800_38A_CTR_AES128;
    let cipher = Aes::new(&hex_bytes(vector.key)).unwrap();
    let iv = Iv::from_slice(&hex_bytes(vector.iv)).unwrap();

    let mut data = hex_bytes(vector.plaintext);
    let (head, tail) = data.split_at_mut(23);

    let mut ctr = Ctr::new(&cipher, &iv).unwrap();
    ctr.process(head).unwrap();
    ctr.process(tail).unwrap();
    assert_eq!(hex::encode(&data), vector.ciphertext);
}

#[test]
fn test_errors_surface_as_api_errors() {
    let err: Error = Aes::new(&[0u8; 10]).unwrap_err().into();
    assert!(matches!(err, Error::InvalidKey { .. }));

    let cipher = Aes::new(&[0u8; 16]).unwrap();
    let err: Error = cipher.encrypt_ctr(b"x", &[0u8; 8]).unwrap_err().into();
    assert!(matches!(err, Error::InvalidLength { expected: 16, actual: 8, .. }));
}

#[test]
fn test_file_cipher_round_trip_random_payloads() {
    let dir = tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for (i, len) in [0usize, 1, 15, 16, 17, 1024, 65_537].into_iter().enumerate() {
        let mut key = vec![0u8; [16, 24, 32][i % 3]];
        rng.fill_bytes(&mut key);
        let mut payload = vec![0u8; len];
        rng.fill_bytes(&mut payload);

        let plain = dir.path().join(format!("{}.txt", i));
        let sealed = dir.path().join(format!("{}.aes", i));
        let opened = dir.path().join(format!("{}.out", i));
        fs::write(&plain, &payload).unwrap();

        let cipher = FileCipher::new(&key, CipherMode::Ecb).unwrap();
        cipher.encrypt_file(&plain, &sealed).unwrap();
        assert_eq!(
            fs::metadata(&sealed).unwrap().len() as usize,
            (len / 16 + 1) * 16
        );

        cipher.decrypt_file(&sealed, &opened).unwrap();
        assert!(compare_files(&plain, &opened).unwrap());
        assert_eq!(fs::read(&opened).unwrap(), payload);
    }
}

#[test]
fn test_tampered_file_differs_after_decrypt() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain");
    let sealed = dir.path().join("sealed");
    let opened = dir.path().join("opened");

    let payload: Vec<u8> = (0..200u8).collect();
    fs::write(&plain, &payload).unwrap();

    let cipher = FileCipher::new(&[9u8; 32], CipherMode::Ecb).unwrap();
    cipher.encrypt_file(&plain, &sealed).unwrap();

    // Flip a bit in the first block; the padding block is left alone
    let mut bytes = fs::read(&sealed).unwrap();
    bytes[3] ^= 0x80;
    fs::write(&sealed, &bytes).unwrap();

    cipher.decrypt_file(&sealed, &opened).unwrap();
    assert!(!compare_files(&plain, &opened).unwrap());
    assert_eq!(fs::read(&opened).unwrap()[16..], payload[16..]);
}

#[test]
fn test_wrong_key_fails_or_differs() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain");
    let sealed = dir.path().join("sealed");
    let opened = dir.path().join("opened");
    fs::write(&plain, b"the quick brown fox jumps over the lazy dog").unwrap();

    FileCipher::new(&[1u8; 16], CipherMode::Ecb)
        .unwrap()
        .encrypt_file(&plain, &sealed)
        .unwrap();

    // A wrong key yields garbage padding (an error) or garbage output
    let other = FileCipher::new(&[2u8; 16], CipherMode::Ecb).unwrap();
    match other.decrypt_file(&sealed, &opened) {
        Ok(_) => assert!(!compare_files(&plain, &opened).unwrap()),
        Err(e) => assert!(matches!(e, Error::InvalidCiphertext { .. })),
    }
}
