//! Property-based tests for the AES core, CTR mode and the padded file transform

use std::io::Cursor;

use aescrypt_algorithms::block::aes::gf::{gf_mul, xtime};
use aescrypt_algorithms::block::aes::State;
use aescrypt_algorithms::block::BlockCipher;
use aescrypt_algorithms::{Aes, Counter, Ctr, Iv};
use aescrypt_symmetric::padding::{pad, unpad};
use aescrypt_symmetric::{compare_streams, CipherMode, FileCipher};
use proptest::prelude::*;

/// Any valid AES key: 16, 24 or 32 random bytes
fn aes_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

proptest! {
    #[test]
    fn block_round_trip(key in aes_key(), block in any::<[u8; 16]>()) {
        let cipher = Aes::new(&key).unwrap();

        let mut data = block;
        cipher.encrypt_block(&mut data).unwrap();
        cipher.decrypt_block(&mut data).unwrap();

        prop_assert_eq!(data, block);
    }

    #[test]
    fn different_keys_produce_different_blocks(
        key1 in any::<[u8; 16]>(),
        key2 in any::<[u8; 16]>(),
        block in any::<[u8; 16]>()
    ) {
        prop_assume!(key1 != key2);

        let c1 = Aes::new(&key1).unwrap().encrypt_block_copy(&block).unwrap();
        let c2 = Aes::new(&key2).unwrap().encrypt_block_copy(&block).unwrap();

        prop_assert_ne!(c1, c2);
    }

    #[test]
    fn ctr_round_trip_any_length(
        key in aes_key(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..=300)
    ) {
        let cipher = Aes::new(&key).unwrap();

        let ciphertext = cipher.encrypt_ctr(&data, &iv).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());

        let plaintext = cipher.decrypt_ctr(&ciphertext, &iv).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn ctr_chunking_is_transparent(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..=200),
        split in 1usize..40
    ) {
        let cipher = Aes::new(&key).unwrap();
        let expected = cipher.encrypt_ctr(&data, &iv).unwrap();

        let mut ctr = Ctr::new(&cipher, &Iv::new(iv)).unwrap();
        let mut chunked = data.clone();
        for chunk in chunked.chunks_mut(split) {
            ctr.process(chunk).unwrap();
        }

        prop_assert_eq!(chunked, expected);
    }

    #[test]
    fn counter_increment_is_big_endian_add(start in any::<u128>()) {
        let mut counter = Counter::new(start.to_be_bytes());
        counter.increment();
        prop_assert_eq!(counter.value(), start.wrapping_add(1));
        prop_assert_eq!(*counter.as_bytes(), start.wrapping_add(1).to_be_bytes());
    }

    #[test]
    fn state_transforms_invert(block in any::<[u8; 16]>()) {
        let original = State::from_bytes(&block);

        let mut state = original;
        state.shift_rows();
        state.inv_shift_rows();
        prop_assert_eq!(state, original);

        state.mix_columns();
        state.inv_mix_columns();
        prop_assert_eq!(state, original);

        state.sub_bytes();
        state.inv_sub_bytes();
        prop_assert_eq!(state, original);
    }

    #[test]
    fn xtime_matches_multiplication_by_two(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(xtime(a), gf_mul(a, 2));
        prop_assert_eq!(gf_mul(a, b), gf_mul(b, a));
    }

    #[test]
    fn padding_round_trip(data in prop::collection::vec(any::<u8>(), 0..=100)) {
        let padded = pad(&data);
        prop_assert_eq!(padded.len() % 16, 0);
        prop_assert!(padded.len() > data.len());
        prop_assert!(padded.len() - data.len() <= 16);
        prop_assert_eq!(unpad(&padded).unwrap(), &data[..]);
    }

    #[test]
    fn file_stream_round_trip(
        key in aes_key(),
        data in prop::collection::vec(any::<u8>(), 0..=600)
    ) {
        let cipher = FileCipher::new(&key, CipherMode::Ecb).unwrap();

        let mut ciphertext = Vec::new();
        cipher.encrypt_stream(Cursor::new(&data), &mut ciphertext).unwrap();
        prop_assert_eq!(ciphertext.len(), (data.len() / 16 + 1) * 16);

        let mut plaintext = Vec::new();
        cipher.decrypt_stream(Cursor::new(&ciphertext), &mut plaintext).unwrap();
        prop_assert!(compare_streams(Cursor::new(&plaintext), Cursor::new(&data)).unwrap());
    }
}
