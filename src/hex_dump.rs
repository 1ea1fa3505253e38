//! Hex editor style text view of a byte buffer.
//!
//! Every row covers up to [`BYTES_PER_ROW`] bytes and looks like
//!
//! ```text
//! 41 00 7e 7f  | A.~.
//! ```
//!
//! i.e. each byte as two lowercase hex digits plus one space, then `" | "`,
//! then one character per byte. Short rows are not padded.

use std::fmt::{self, Write};

use crate::classify::classify;
use crate::constants::{ASCII_SEPARATOR, BYTES_PER_ROW, NON_PRINTABLE_PLACEHOLDER};

/// One line of the dump, borrowing its bytes from the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDumpRow<'a> {
    bytes: &'a [u8],
}

impl HexDumpRow<'_> {
    /// Hex tokens, `"xx "` per byte
    pub fn hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x} ", b)).collect()
    }

    /// ASCII gutter, the byte itself when printable and `.` otherwise
    pub fn ascii(&self) -> String {
        self.bytes.iter().map(|&b| ascii_char(b)).collect()
    }

    fn write_hex<W: Write>(&self, out: &mut W) -> fmt::Result {
        for byte in self.bytes {
            write!(out, "{:02x} ", byte)?;
        }
        Ok(())
    }

    fn write_ascii<W: Write>(&self, out: &mut W) -> fmt::Result {
        for &byte in self.bytes {
            out.write_char(ascii_char(byte))?;
        }
        Ok(())
    }
}

impl fmt::Display for HexDumpRow<'_> {
    /// Writes the row without its trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f)?;
        f.write_str(ASCII_SEPARATOR)?;
        self.write_ascii(f)
    }
}

fn ascii_char(byte: u8) -> char {
    if classify(byte).is_printable() {
        byte as char
    } else {
        NON_PRINTABLE_PLACEHOLDER
    }
}

/// Lazily splits `data` into rows of at most 16 bytes. Empty input yields
/// no rows.
pub fn hex_dump_rows(data: &[u8]) -> impl Iterator<Item = HexDumpRow<'_>> {
    data.chunks(BYTES_PER_ROW).map(|bytes| HexDumpRow { bytes })
}

/// Number of rows `hex_dump_rows` produces for an input of `len` bytes
pub fn row_count(len: usize) -> usize {
    len.div_ceil(BYTES_PER_ROW)
}

/// Renders the whole dump as a single string, every row terminated by `\n`.
pub fn render_hex_dump(data: &[u8]) -> String {
    hex_dump_rows(data).map(|row| format!("{}\n", row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_has_no_rows() {
        assert_eq!(hex_dump_rows(&[]).count(), 0);
        assert_eq!(render_hex_dump(&[]), "");
    }

    #[test]
    fn boundary_bytes() {
        let dump = render_hex_dump(&[0x41, 0x00, 0x7E, 0x7F]);
        assert_eq!(dump, "41 00 7e 7f  | A.~.\n");
    }

    #[test]
    fn full_row() {
        let data: Vec<u8> = (b'a'..=b'p').collect();
        let rows: Vec<_> = hex_dump_rows(&data).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hex().len(), 48);
        assert_eq!(rows[0].ascii(), "abcdefghijklmnop");
        assert_eq!(
            rows[0].to_string(),
            "61 62 63 64 65 66 67 68 69 6a 6b 6c 6d 6e 6f 70  | abcdefghijklmnop"
        );
    }

    #[test]
    fn display_is_hex_then_separator_then_gutter() {
        let data = b"\x00\x1f ~\x7f\x80\xffok";
        for row in hex_dump_rows(data) {
            assert_eq!(row.to_string(), format!("{} | {}", row.hex(), row.ascii()));
        }
        assert_eq!(render_hex_dump(data), "00 1f 20 7e 7f 80 ff 6f 6b  | .. ~...ok\n");
    }

    #[test]
    fn seventeen_bytes_spill_into_a_short_row() {
        let mut data = vec![0xFFu8; 16];
        data.push(b' ');
        let rows: Vec<_> = hex_dump_rows(&data).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].hex(), "20 ");
        assert_eq!(rows[1].ascii(), " ");

        let dump = render_hex_dump(&data);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[0], format!("{} | {}", "ff ".repeat(16), ".".repeat(16)));
        assert_eq!(lines[1], "20  |  ");
    }

    #[test]
    fn hex_digits_are_lowercase() {
        let dump = render_hex_dump(&[0xAB, 0xCD, 0xEF]);
        assert_eq!(dump, "ab cd ef  | ...\n");
    }

    #[test]
    fn every_row_is_newline_terminated() {
        let data = [b'z'; 40];
        let dump = render_hex_dump(&data);
        assert_eq!(dump.matches('\n').count(), 3);
        assert!(dump.ends_with("7a 7a 7a 7a 7a 7a 7a 7a  | zzzzzzzz\n"));
        assert_eq!(row_count(data.len()), 3);
    }

    #[test]
    fn row_count_matches_rows() {
        for len in [0usize, 1, 15, 16, 17, 32, 33] {
            let data = vec![0u8; len];
            assert_eq!(hex_dump_rows(&data).count(), row_count(len), "len {}", len);
        }
    }
}
