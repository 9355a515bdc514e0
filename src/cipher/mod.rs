//! Reference ChaCha20 cipher (RFC 8439).
//!
//! This module computes the expected ciphertext for a fixture set. It is
//! a plain, stateless implementation: every call takes the full key,
//! nonce and starting counter, and nothing is retained afterwards.
//!
//! It is **not** meant for protecting data. There is no side-channel
//! hardening, no incremental API, and no authentication.

mod chacha20;

pub use chacha20::{BLOCK_LEN, KEY_LEN, NONCE_LEN, block, decrypt, encrypt, keystream};
