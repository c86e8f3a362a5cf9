//! Published Speck test vectors
//!
//! Vectors are written most significant word first, as in Appendix C of the
//! Speck paper. [`convert`] turns them into wire order.

/// One known-answer entry
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    /// Block size in bytes
    pub block_size: usize,
    /// Key, most significant word first
    pub key: &'static str,
    /// Plaintext, most significant word first
    pub pt: &'static str,
    /// Ciphertext, most significant word first
    pub ct: &'static str,
}

/// Decodes a vector string into wire order
///
/// Panics on malformed hex, which only ever comes from a typo in a table.
pub fn convert(s: &str) -> Vec<u8> {
    let mut bytes = hex::decode(s.replace(' ', "")).expect("valid hex in test vector");
    bytes.reverse();
    bytes
}

/// One vector per variant, in table order
pub const VECTORS: &[KnownAnswer] = &[
    KnownAnswer { block_size: 4, key: "1918 1110 0908 0100", pt: "6574 694c", ct: "a868 42f2" },
    KnownAnswer {
        block_size: 6,
        key: "121110 0a0908 020100",
        pt: "20796c 6c6172",
        ct: "c049a5 385adc",
    },
    KnownAnswer {
        block_size: 6,
        key: "1a1918 121110 0a0908 020100",
        pt: "6d2073 696874",
        ct: "735e10 b6445d",
    },
    KnownAnswer {
        block_size: 8,
        key: "13121110 0b0a0908 03020100",
        pt: "74614620 736e6165",
        ct: "9f7952ec 4175946c",
    },
    KnownAnswer {
        block_size: 8,
        key: "1b1a1918 13121110 0b0a0908 03020100",
        pt: "3b726574 7475432d",
        ct: "8c6fa548 454e028b",
    },
    KnownAnswer {
        block_size: 12,
        key: "0d0c0b0a0908 050403020100",
        pt: "65776f68202c 656761737520",
        ct: "9e4d09ab7178 62bdde8f79aa",
    },
    KnownAnswer {
        block_size: 12,
        key: "151413121110 0d0c0b0a0908 050403020100",
        pt: "656d6974206e 69202c726576",
        ct: "2bf31072228a 7ae440252ee6",
    },
    KnownAnswer {
        block_size: 16,
        key: "0f0e0d0c0b0a0908 0706050403020100",
        pt: "6c61766975716520 7469206564616d20",
        ct: "a65d985179783265 7860fedf5c570d18",
    },
    KnownAnswer {
        block_size: 16,
        key: "1716151413121110 0f0e0d0c0b0a0908 0706050403020100",
        pt: "7261482066656968 43206f7420746e65",
        ct: "1be4cf3a13135566 f9bc185de03c1886",
    },
    KnownAnswer {
        block_size: 16,
        key: "1f1e1d1c1b1a1918 1716151413121110 0f0e0d0c0b0a0908 0706050403020100",
        pt: "65736f6874206e49 202e72656e6f6f70",
        ct: "4109010405c0f53e 4eeeb48d9c188f43",
    },
];
