//! Run parameters and size validation.

use crate::cipher::BLOCK_LEN;
use crate::error::{FixtureError, Result};

/// Parameters of one generation run.
///
/// The plaintext size is `512 × blocks_per_cycle × big_blocks` bits, i.e.
/// `big_blocks` stacked copies of what the core consumes in one cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureParams {
    /// Number of 512-bit ChaCha20 blocks the core processes per cycle.
    pub blocks_per_cycle: usize,
    /// Width of the hardware data bus in bits. Reported only.
    pub bus_width: usize,
    /// Number of per-cycle chunks stacked into the plaintext.
    pub big_blocks: usize,
}

impl FixtureParams {
    pub fn new(blocks_per_cycle: usize, bus_width: usize, big_blocks: usize) -> Self {
        Self {
            blocks_per_cycle,
            bus_width,
            big_blocks,
        }
    }

    /// Plaintext size in bytes.
    ///
    /// # Errors
    /// - [`FixtureError::PlaintextSizeOverflow`] if the product overflows.
    /// - [`FixtureError::InsufficientPlaintextSize`] if it is under 64 bytes.
    pub fn plaintext_len(&self) -> Result<usize> {
        let bytes = BLOCK_LEN
            .checked_mul(self.blocks_per_cycle)
            .and_then(|n| n.checked_mul(self.big_blocks))
            .ok_or(FixtureError::PlaintextSizeOverflow)?;

        if bytes < BLOCK_LEN {
            return Err(FixtureError::InsufficientPlaintextSize { bytes });
        }

        Ok(bytes)
    }

    pub fn validate(&self) -> Result<()> {
        self.plaintext_len().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_formula() {
        assert_eq!(FixtureParams::new(1, 128, 1).plaintext_len().unwrap(), 64);
        assert_eq!(FixtureParams::new(4, 512, 3).plaintext_len().unwrap(), 768);
    }

    #[test]
    fn zero_factor_is_too_small() {
        let err = FixtureParams::new(2, 128, 0).validate().unwrap_err();

        assert!(matches!(
            err,
            FixtureError::InsufficientPlaintextSize { bytes: 0 }
        ));
    }

    #[test]
    fn overflow_is_reported() {
        let err = FixtureParams::new(usize::MAX, 128, 2)
            .plaintext_len()
            .unwrap_err();

        assert!(matches!(err, FixtureError::PlaintextSizeOverflow));
    }
}
