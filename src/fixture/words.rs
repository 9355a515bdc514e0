//! Little-endian word stream: the testbench stimulus/response format.
//!
//! A buffer is cut into 4-byte groups in their original order. Each group
//! is read as a little-endian `u32` and written as one line of 8 lowercase
//! hex digits. Group `i` of the input is line `i` of the output; only the
//! bytes *inside* each word are flipped.
//!
//! ```text
//! bytes: 00 01 02 03 | 04 05 06 07
//! file:  03020100
//!        07060504
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FixtureError, Result};

/// Bytes per emitted word.
pub const WORD_LEN: usize = 4;

/// Encodes `bytes` as newline-terminated little-endian hex words.
///
/// # Errors
/// [`FixtureError::MalformedWordAlignment`] when `bytes.len()` is not a
/// multiple of 4.
pub fn to_le_words(bytes: &[u8]) -> Result<String> {
    if bytes.len() % WORD_LEN != 0 {
        return Err(FixtureError::MalformedWordAlignment { len: bytes.len() });
    }

    let mut out = String::with_capacity(bytes.len() / WORD_LEN * 9);

    for group in bytes.chunks_exact(WORD_LEN) {
        let word = u32::from_le_bytes([group[0], group[1], group[2], group[3]]);
        let _ = writeln!(out, "{word:08x}");
    }

    Ok(out)
}

/// Decodes a word stream produced by [`to_le_words`] back into bytes.
///
/// Surrounding whitespace on each line and trailing blank lines are
/// tolerated. Line numbers in errors are 1-based.
pub fn from_le_words(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.len() != 8 || !line.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FixtureError::MalformedWord {
                line: idx + 1,
                reason: format!("expected 8 hex digits, found {line:?}"),
            });
        }

        let word = u32::from_str_radix(line, 16).map_err(|e| FixtureError::MalformedWord {
            line: idx + 1,
            reason: e.to_string(),
        })?;

        out.extend_from_slice(&word.to_le_bytes());
    }

    Ok(out)
}

/// Writes the word form of `bytes` to `path`, replacing any existing file.
pub fn write_le_words(path: &Path, bytes: &[u8]) -> Result<()> {
    let text = to_le_words(bytes)?;

    fs::write(path, text).map_err(|e| FixtureError::io(path, e))?;
    debug!(path = %path.display(), words = bytes.len() / WORD_LEN, "wrote word file");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_bytes_within_each_word_only() {
        let bytes = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];

        assert_eq!(to_le_words(&bytes).unwrap(), "03020100\n07060504\n");
    }

    #[test]
    fn rejects_sign_prefix() {
        // u32::from_str_radix alone would accept a leading '+'.
        let err = from_le_words("00000000\n+1234567\n").unwrap_err();

        assert!(matches!(err, FixtureError::MalformedWord { line: 2, .. }));
    }
}
