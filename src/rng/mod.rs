//! Random fixture material
//!
//! Keys, nonces and plaintexts are drawn straight from the operating
//! system CSPRNG. Fixture files may end up under version control, so a
//! seeded or otherwise predictable generator is never used here.
//!
//! An unavailable entropy source is surfaced as
//! [`FixtureError::Entropy`](crate::error::FixtureError::Entropy) rather than
//! a panic, so the run fails before anything is written.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::Result;

/// Fills `buf` with bytes from the operating system.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf)?;
    Ok(())
}

/// Returns `len` random bytes.
pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    fill_random(&mut buf)?;
    Ok(buf)
}

/// Returns a random fixed-size array, e.g. a key or nonce.
pub fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    fill_random(&mut buf)?;
    Ok(buf)
}
