//! Speck key expansion
//!
//! The key schedule reuses the round function: the running round key plays
//! the role of `y`, one of the remaining key words plays `x`, and the round
//! index is the round key. With `m` key words `k0, l0, .., l(m-2)`:
//!
//! ```text
//! l[i+m-1] = (k[i] + ROTR(l[i], alpha)) ^ i
//! k[i+1]   = ROTL(k[i], beta) ^ l[i+m-1]
//! ```
//!
//! Only `m-1` of the `l` words are live at any time, so they are kept in a
//! ring indexed by `i mod (m-1)`.

use speck_params::utils::symmetric::SPECK_MAX_KEY_WORDS;
use zeroize::Zeroize;

use super::round::Arx;

/// Expands `key_words` into `round_keys.len()` round keys
///
/// `key_words` is in little-endian word order: `k0` first, followed by
/// `l0, l1, ..`. This is the order in which the words appear when the key
/// bytes are parsed front to back.
pub(crate) fn expand(arx: &Arx, key_words: &[u64], round_keys: &mut [u64]) {
    debug_assert!((2..=SPECK_MAX_KEY_WORDS).contains(&key_words.len()));

    let ring = key_words.len() - 1;
    let mut l = [0u64; SPECK_MAX_KEY_WORDS - 1];
    l[..ring].copy_from_slice(&key_words[1..]);
    let mut k = key_words[0];

    round_keys[0] = k;
    for i in 0..round_keys.len() - 1 {
        let slot = i % ring;
        let (next_l, next_k) = arx.forward(l[slot], k, i as u64);
        l[slot] = next_l;
        k = next_k;
        round_keys[i + 1] = k;
    }

    l.zeroize();
    k.zeroize();
}
