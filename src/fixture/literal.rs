//! Sized hex literals for hardware source (`<width>'h<hex>`).
//!
//! The literal is the whole buffer read as one big number with byte 0 as
//! the least significant byte, so the byte order of the entire buffer is
//! reversed before hex encoding. This is a different convention from the
//! per-word flip of the word stream in [`super::words`].
//!
//! ```text
//! bytes:   00 01 02 03 04 05 06 07
//! literal: 64'h0706050403020100
//! ```

use crate::error::{FixtureError, Result};

/// Separator between declared width and hex digits.
const HEX_MARKER: &str = "'h";

fn reversed_hex(bytes: &[u8]) -> String {
    let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
    hex::encode(reversed)
}

/// Renders `bytes` as a `<8*len>'h<hex>` literal.
pub fn to_literal(bytes: &[u8]) -> String {
    format!("{}{HEX_MARKER}{}", bytes.len() * 8, reversed_hex(bytes))
}

/// Renders a register declaration initialised with the literal of `bytes`.
///
/// ```text
/// reg [63:0] iv_lo = 64'h0706050403020100;
/// ```
pub fn declaration(name: &str, bytes: &[u8]) -> String {
    let width = bytes.len() * 8;
    format!(
        "reg [{}:0] {name} = {};",
        width.saturating_sub(1),
        to_literal(bytes)
    )
}

/// Parses a literal back into the original byte sequence.
///
/// Accepts a bare `<width>'h<hex>` literal as well as a full line
/// produced by [`declaration`]. The width, when present, must match the
/// number of decoded bits.
pub fn from_literal(text: &str) -> Result<Vec<u8>> {
    let (head, tail) = text
        .split_once(HEX_MARKER)
        .ok_or_else(|| FixtureError::MalformedLiteral(format!("missing {HEX_MARKER} marker")))?;

    let digits = tail.trim().trim_end_matches(';').trim_end();

    let mut bytes = hex::decode(digits)
        .map_err(|e| FixtureError::MalformedLiteral(format!("bad hex digits: {e}")))?;
    bytes.reverse();

    // The width is the trailing decimal run before the marker; a
    // declaration line carries more text in front of it.
    let width_str = {
        let trimmed = head.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map_or(trimmed.len(), |(i, _)| i);
        &trimmed[start..]
    };

    if !width_str.is_empty() {
        let width: usize = width_str
            .parse()
            .map_err(|e| FixtureError::MalformedLiteral(format!("bad width: {e}")))?;

        if width != bytes.len() * 8 {
            return Err(FixtureError::MalformedLiteral(format!(
                "declared width {width} does not match {} decoded bits",
                bytes.len() * 8
            )));
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_whole_buffer() {
        let bytes = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];

        assert_eq!(to_literal(&bytes), "64'h0706050403020100");
    }

    #[test]
    fn declaration_line() {
        assert_eq!(
            declaration("iv", &[0xab, 0xcd]),
            "reg [15:0] iv = 16'hcdab;"
        );
    }

    #[test]
    fn width_mismatch_is_rejected() {
        let err = from_literal("24'hcdab").unwrap_err();

        assert!(matches!(err, FixtureError::MalformedLiteral(_)));
    }

    #[test]
    fn missing_marker_is_rejected() {
        assert!(from_literal("16cdab").is_err());
    }
}
