//! Human-readable hex dump used in the console report.

use std::fmt::Write;

/// Number of bytes shown per dump line.
const BYTES_PER_LINE: usize = 16;

/// Width of the hex column: 16 bytes as `XX` plus 15 separators, rounded
/// to the conventional 48.
const HEX_COLUMN: usize = 48;

/// Renders `data` as a classic address / hex / ASCII dump.
///
/// Each line looks like:
///
/// ```text
/// 00000010: 48 65 6C 6C 6F                                     Hello
/// ```
///
/// The hex column is padded so the ASCII column lines up even on a short
/// final line. Bytes outside `32..=126` are shown as `.`. Empty input
/// renders as an empty string.
pub fn hexdump(data: &[u8]) -> String {
    let mut out = String::new();

    for (line_no, line) in data.chunks(BYTES_PER_LINE).enumerate() {
        let address = line_no * BYTES_PER_LINE;

        let hex = line
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");

        let ascii: String = line
            .iter()
            .map(|&b| if (32..=126).contains(&b) { b as char } else { '.' })
            .collect();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{address:08X}: {hex:<HEX_COLUMN$} {ascii}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_line_layout() {
        let data: Vec<u8> = (0x41..0x51).collect();

        assert_eq!(
            hexdump(&data),
            "00000000: 41 42 43 44 45 46 47 48 49 4A 4B 4C 4D 4E 4F 50  ABCDEFGHIJKLMNOP\n"
        );
    }

    #[test]
    fn short_line_is_padded() {
        let mut data = vec![0u8; 16];
        data.extend_from_slice(b"Hi\x7f");

        let dump = hexdump(&data);
        let second = dump.lines().nth(1).unwrap();

        assert_eq!(second, format!("00000010: {:<48} Hi.", "48 69 7F"));
        assert_eq!(second.len(), 10 + 48 + 1 + 3);
    }

    #[test]
    fn non_printable_bytes_are_dots() {
        let dump = hexdump(&[0x00, 0x1f, 0x20, 0x7e, 0x7f, 0xff]);

        assert!(dump.ends_with("  .. ~..\n"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(hexdump(&[]), "");
    }
}
