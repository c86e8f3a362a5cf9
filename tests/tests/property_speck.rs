//! Property-based tests for Speck and ECB mode

use proptest::prelude::*;
use speck::prelude::*;

/// A variant together with a key of matching length
fn keyed_variant() -> impl Strategy<Value = (Variant, Vec<u8>)> {
    prop::sample::select(Variant::ALL.to_vec()).prop_flat_map(|v| {
        (Just(v), prop::collection::vec(any::<u8>(), v.key_size()))
    })
}

/// A variant, a key and data that is a whole number of blocks
fn keyed_variant_with_data() -> impl Strategy<Value = (Variant, Vec<u8>, Vec<u8>)> {
    keyed_variant().prop_flat_map(|(v, key)| {
        let bs = v.block_size();
        let data = (0usize..=16)
            .prop_flat_map(move |blocks| prop::collection::vec(any::<u8>(), blocks * bs));
        (Just(v), Just(key), data)
    })
}

proptest! {
    #[test]
    fn speck_block_roundtrip((variant, key) in keyed_variant(), seed in any::<[u8; 16]>()) {
        let cipher = Speck::with_variant(variant, &key).unwrap();
        let pt = &seed[..variant.block_size()];

        let mut ct = vec![0u8; variant.block_size()];
        let mut back = vec![0u8; variant.block_size()];
        cipher.encrypt(&mut ct, pt);
        cipher.decrypt(&mut back, &ct);

        prop_assert_eq!(&back[..], pt);
    }

    #[test]
    fn speck_in_place_matches_separate_buffers(
        (variant, key) in keyed_variant(),
        seed in any::<[u8; 16]>()
    ) {
        let cipher = Speck::with_variant(variant, &key).unwrap();
        let pt = &seed[..variant.block_size()];

        let mut ct = vec![0u8; variant.block_size()];
        cipher.encrypt(&mut ct, pt);

        let mut block = pt.to_vec();
        cipher.encrypt_block(&mut block);
        prop_assert_eq!(block, ct);
    }

    #[test]
    fn ecb_roundtrip((variant, key, data) in keyed_variant_with_data()) {
        let cipher = Speck::with_variant(variant, &key).unwrap();

        let mut ct = vec![0u8; data.len()];
        Ecb::encrypter(&cipher).crypt_blocks(&mut ct, &data);

        let mut buf = ct.clone();
        Ecb::decrypter(&cipher).crypt_blocks_in_place(&mut buf);
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn ecb_blocks_are_independent((variant, key, data) in keyed_variant_with_data()) {
        let cipher = Speck::with_variant(variant, &key).unwrap();
        let bs = variant.block_size();

        let mut ct = data.clone();
        Ecb::encrypter(&cipher).crypt_blocks_in_place(&mut ct);

        for (pt_block, ct_block) in data.chunks_exact(bs).zip(ct.chunks_exact(bs)) {
            let mut single = vec![0u8; bs];
            cipher.encrypt(&mut single, pt_block);
            prop_assert_eq!(&single[..], ct_block);
        }
    }

    #[test]
    fn ecb_identical_blocks_give_identical_ciphertext(
        (variant, key) in keyed_variant(),
        seed in any::<[u8; 16]>(),
        copies in 2usize..8
    ) {
        let cipher = Speck::with_variant(variant, &key).unwrap();
        let bs = variant.block_size();
        let data = seed[..bs].repeat(copies);

        let ct = Ecb::encrypter(&cipher).crypt_vec(&data).unwrap();
        let first = &ct[..bs];
        prop_assert!(ct.chunks_exact(bs).all(|block| block == first));
    }

    #[test]
    fn ecb_rejects_misaligned_input(
        (variant, key) in keyed_variant(),
        len in 1usize..64
    ) {
        let cipher = Speck::with_variant(variant, &key).unwrap();
        prop_assume!(len % variant.block_size() != 0);

        let src = vec![0u8; len];
        let mut dst = vec![0u8; len];
        prop_assert!(Ecb::encrypter(&cipher).try_crypt_blocks(&mut dst, &src).is_err());
        prop_assert_eq!(dst, vec![0u8; len]);
    }

    #[test]
    fn unsupported_sizes_are_rejected(block_size in 0usize..40, key_size in 0usize..40) {
        let supported = Variant::ALL
            .iter()
            .any(|v| v.block_size() == block_size && v.key_size() == key_size);
        let result = speck::new_cipher(&vec![0u8; key_size], block_size);
        prop_assert_eq!(result.is_ok(), supported);
    }
}
