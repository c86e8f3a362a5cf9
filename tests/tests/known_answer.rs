//! Known-answer tests for every Speck variant through the public facade

use speck::prelude::*;
use speck_tests::vectors::{convert, VECTORS};

#[test]
fn test_vectors_through_facade() {
    for v in VECTORS {
        let cipher = speck::new_cipher(&convert(v.key), v.block_size).unwrap();
        assert_eq!(cipher.block_size(), v.block_size);

        let mut out = vec![0u8; v.block_size];
        cipher.encrypt(&mut out, &convert(v.pt));
        assert_eq!(out, convert(v.ct), "{}", cipher.name());

        cipher.decrypt(&mut out, &convert(v.ct));
        assert_eq!(out, convert(v.pt), "{}", cipher.name());
    }
}

#[test]
fn test_vectors_through_ecb_in_place() {
    for v in VECTORS {
        let cipher = speck::new_cipher(&convert(v.key), v.block_size).unwrap();

        // Three copies of the vector block
        let mut buf = convert(v.pt).repeat(3);
        Ecb::encrypter(&cipher).crypt_blocks_in_place(&mut buf);
        assert_eq!(buf, convert(v.ct).repeat(3), "{}", cipher.name());

        Ecb::decrypter(&cipher).crypt_blocks_in_place(&mut buf);
        assert_eq!(buf, convert(v.pt).repeat(3), "{}", cipher.name());
    }
}

#[test]
fn test_ecb_disjoint_buffers() {
    let cipher = speck::new_cipher(&convert("13121110 0b0a0908 03020100"), 8).unwrap();
    let src = convert("74614620 736e6165").repeat(2);
    let mut dst = vec![0u8; 24];

    Ecb::encrypter(&cipher).crypt_blocks(&mut dst, &src);
    assert_eq!(&dst[..16], &convert("9f7952ec 4175946c").repeat(2)[..]);
    // Bytes past the input length are untouched
    assert_eq!(&dst[16..], &[0u8; 8]);
}

#[test]
fn test_invalid_configuration_is_size_error() {
    let err = speck::new_cipher(&[0u8; 16], 4).unwrap_err();
    assert!(err.is_size_error());
    assert_eq!(
        err,
        Error::InvalidSize { block_size: 4, key_size: 16 }
    );

    assert!(speck::new_cipher(&[], 16).is_err());
    assert!(speck::new_cipher(&[0u8; 8], 8).is_err());
}

#[test]
fn test_size_error_message() {
    let err = speck::new_cipher(&[0u8; 7], 5).unwrap_err();
    assert_eq!(err.to_string(), "speck: invalid block size 5 and key size 7");
}

#[test]
fn test_variant_lookup_matches_constructor() {
    for v in Variant::ALL {
        let cipher = speck::new_cipher(&vec![1u8; v.key_size()], v.block_size()).unwrap();
        assert_eq!(cipher.variant(), v);
    }
}
