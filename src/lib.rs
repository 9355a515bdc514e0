//! Golden-value fixtures for ChaCha20 hardware testbenches
//!
//! This crate generates the stimulus and expected output used to check a
//! hardware ChaCha20 core in simulation. A run draws a random key, nonce
//! and plaintext, computes the reference ciphertext, and writes each value
//! in the formats the testbench and the hardware source consume.
//!
//! # Module overview
//!
//! - `cipher`
//!   Stateless reference ChaCha20 (RFC 8439): single block, keystream of
//!   arbitrary length, and XOR encryption. Written from scratch so that
//!   the golden values do not depend on the implementation under test or
//!   on a third-party cipher.
//!
//! - `fixture`
//!   Pure formatting of byte buffers:
//!   - hex dump for the console,
//!   - little-endian 32-bit word files for the testbench,
//!   - sized `<width>'h<hex>` literals for register initial values.
//!
//!   The word files and the literals use **different byte orders**
//!   (per-word flip versus whole-buffer reversal) and are kept in
//!   separately named functions.
//!
//! - `params`
//!   Run parameters and plaintext sizing.
//!
//! - `rng`
//!   Operating system randomness for keys, nonces and plaintexts.
//!
//! - `generate`
//!   Ties the above together into a [`FixtureSet`] that is generated,
//!   reported and written to disk in one shot.
//!
//! # Errors
//!
//! Every fallible operation returns [`FixtureError`]. All failures are
//! fatal to a run, and the output directory is only updated once every
//! artifact has been staged successfully.

pub mod cipher;
pub mod error;
pub mod fixture;
pub mod generate;
pub mod params;
pub mod rng;

pub use error::{FixtureError, Result};
pub use generate::FixtureSet;
pub use params::FixtureParams;
