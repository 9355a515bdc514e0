//! ChaCha20 core implementation
//!
//! This module provides a dependency-free implementation of the ChaCha20
//! stream cipher as specified in RFC 8439. It produces the golden values
//! the hardware testbench compares against, so it favors a direct,
//! easily audited transcription of the RFC over speed.
//!
//! The cipher state is rebuilt for every block from an immutable seed
//! (constants, key, nonce); only the counter word changes between blocks.
//! The counter is a local accumulator of a single call and wraps modulo
//! 2³² like every other word operation.

use crate::error::{FixtureError, Result};

/// Key size in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Nonce size in bytes (96 bits, IETF variant).
pub const NONCE_LEN: usize = 12;

/// Size of one keystream block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Index of the block counter word inside the state.
const COUNTER_WORD: usize = 12;

/// ChaCha20 constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"`
/// encoded as little-endian `u32` words.
const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Performs one ChaCha20 quarter round on words `a`, `b`, `c`, `d`.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies the full ChaCha20 permutation (20 rounds).
///
/// 10 iterations of one column round followed by one diagonal round.
pub(crate) fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

#[inline(always)]
fn le_word(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Builds the seed state with the counter word left at zero.
///
/// Layout:
///
/// ```text
/// constant  constant  constant  constant
/// key       key       key       key
/// key       key       key       key
/// counter   nonce     nonce     nonce
/// ```
fn seed_state(key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN]) -> [u32; 16] {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CHACHA20_CONSTANTS);

    state[4..12]
        .iter_mut()
        .zip(key.chunks_exact(4))
        .for_each(|(s, k)| *s = le_word(k));

    state[13..16]
        .iter_mut()
        .zip(nonce.chunks_exact(4))
        .for_each(|(s, n)| *s = le_word(n));

    state
}

/// Computes the keystream block for `counter` from a seed state.
fn block_from_seed(seed: &[u32; 16], counter: u32) -> [u8; BLOCK_LEN] {
    let mut state = *seed;
    state[COUNTER_WORD] = counter;

    // Preserve original state for feed-forward
    let original = state;

    rounds(&mut state);

    state
        .iter_mut()
        .zip(&original)
        .for_each(|(s, o)| *s = s.wrapping_add(*o));

    let mut out = [0u8; BLOCK_LEN];
    out.chunks_exact_mut(4)
        .zip(&state)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}

/// Generates a single 64-byte ChaCha20 keystream block.
///
/// # Parameters
/// - `key`: 256-bit key
/// - `counter`: 32-bit block counter
/// - `nonce`: 96-bit nonce
pub fn block(key: &[u8; KEY_LEN], counter: u32, nonce: &[u8; NONCE_LEN]) -> [u8; BLOCK_LEN] {
    block_from_seed(&seed_state(key, nonce), counter)
}

fn check_key(key: &[u8]) -> Result<&[u8; KEY_LEN]> {
    key.try_into()
        .map_err(|_| FixtureError::InvalidKeyLength { len: key.len() })
}

fn check_nonce(nonce: &[u8]) -> Result<&[u8; NONCE_LEN]> {
    nonce
        .try_into()
        .map_err(|_| FixtureError::InvalidNonceLength { len: nonce.len() })
}

/// Produces exactly `len` bytes of keystream starting at block `counter`.
///
/// Blocks are concatenated in counter order and the last one is truncated,
/// so no bytes past `len` are ever returned.
///
/// # Errors
/// [`FixtureError::InvalidKeyLength`] or [`FixtureError::InvalidNonceLength`]
/// when the key or nonce has the wrong size.
pub fn keystream(key: &[u8], nonce: &[u8], counter: u32, len: usize) -> Result<Vec<u8>> {
    let seed = seed_state(check_key(key)?, check_nonce(nonce)?);

    let mut out = Vec::with_capacity(len);
    let mut block_counter = counter;

    while out.len() < len {
        let block = block_from_seed(&seed, block_counter);
        block_counter = block_counter.wrapping_add(1);

        let take = (len - out.len()).min(BLOCK_LEN);
        out.extend_from_slice(&block[..take]);
    }

    Ok(out)
}

/// Encrypts `plaintext` by XORing it with the keystream.
///
/// The ciphertext always has the same length as the plaintext. An empty
/// plaintext yields an empty ciphertext.
pub fn encrypt(key: &[u8], nonce: &[u8], counter: u32, plaintext: &[u8]) -> Result<Vec<u8>> {
    let seed = seed_state(check_key(key)?, check_nonce(nonce)?);

    let mut out = plaintext.to_vec();
    let mut block_counter = counter;

    for chunk in out.chunks_mut(BLOCK_LEN) {
        let block = block_from_seed(&seed, block_counter);
        block_counter = block_counter.wrapping_add(1);

        chunk
            .iter_mut()
            .zip(block.iter())
            .for_each(|(byte, ks)| *byte ^= ks);
    }

    Ok(out)
}

/// Decrypts `ciphertext`. Identical to [`encrypt`].
pub fn decrypt(key: &[u8], nonce: &[u8], counter: u32, ciphertext: &[u8]) -> Result<Vec<u8>> {
    encrypt(key, nonce, counter, ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_round_matches_rfc8439_2_1_1() {
        let mut state = [0u32; 16];
        state[0] = 0x1111_1111;
        state[1] = 0x0102_0304;
        state[2] = 0x9b8d_6f43;
        state[3] = 0x0123_4567;

        quarter_round(&mut state, 0, 1, 2, 3);

        assert_eq!(state[0], 0xea2a_92f4);
        assert_eq!(state[1], 0xcb1c_f8ce);
        assert_eq!(state[2], 0x4581_472e);
        assert_eq!(state[3], 0x5881_c4bb);
    }

    #[test]
    fn seed_state_layout() {
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let nonce = [0, 0, 0, 0x09, 0, 0, 0, 0x4a, 0, 0, 0, 0];

        let state = seed_state(&key, &nonce);

        assert_eq!(state[0..4], CHACHA20_CONSTANTS);
        assert_eq!(state[4], 0x0302_0100);
        assert_eq!(state[11], 0x1f1e_1d1c);
        assert_eq!(state[COUNTER_WORD], 0);
        assert_eq!(state[13..16], [0x0900_0000, 0x4a00_0000, 0x0000_0000]);
    }

    #[test]
    fn counter_wraps_silently() {
        let key = [0x5au8; 32];
        let nonce = [0xa5u8; 12];

        let stream = keystream(&key, &nonce, u32::MAX, 2 * BLOCK_LEN).unwrap();

        assert_eq!(stream[..BLOCK_LEN], block(&key, u32::MAX, &nonce));
        assert_eq!(stream[BLOCK_LEN..], block(&key, 0, &nonce));
    }

    #[test]
    fn keystream_is_truncated_to_request() {
        let key = [7u8; 32];
        let nonce = [9u8; 12];

        let stream = keystream(&key, &nonce, 0, 70).unwrap();

        assert_eq!(stream.len(), 70);
        assert_eq!(stream[64..], block(&key, 1, &nonce)[..6]);
    }
}
